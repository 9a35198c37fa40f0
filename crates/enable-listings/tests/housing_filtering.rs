use enable_listings::listings::{
    apply_filters, import, FilterConfig, FilterField, HousingListing,
};

fn fetched_collection() -> Vec<HousingListing> {
    // Wire-shaped documents as the backing store delivers them: numbers and
    // numeric strings mixed freely, fields missing at random.
    let raw = r#"[
        { "id": "h-1", "address": "12 Oak St", "bed": 2, "bath": 1,
          "applicationFees": 0, "bathroom": "Bath Grab Bars or Reinforcements",
          "pets": "yes", "contactPhone": "555-0100" },
        { "id": "h-2", "address": "88 Elm Ave", "bed": "3", "bath": "2",
          "applicationFees": "35", "bathroom": "walk-in shower", "pets": "no" },
        { "id": "h-3", "address": "5 Birch Ct", "bed": "2", "bath": 1,
          "applicationFees": "0", "pets": "No" },
        { "id": "h-4", "address": "9 Cedar Ln", "bed": "two", "pets": "yes" },
        { "id": "h-5", "address": "301 Maple Dr", "bed": 4, "bath": 3,
          "parking": "Off Street stalls", "ageRequirement": "YES" }
    ]"#;
    import::housing_from_json(raw.as_bytes()).expect("fixture parses")
}

fn ids(listings: &[HousingListing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.0.as_str()).collect()
}

#[test]
fn identity_law_holds_for_the_all_any_configuration() {
    let records = fetched_collection();
    assert_eq!(apply_filters(&records, &FilterConfig::new()), records);
}

#[test]
fn surviving_records_keep_their_fetch_order() {
    let records = fetched_collection();
    let config = FilterConfig::new().with(FilterField::Bath, "1");

    assert_eq!(ids(&apply_filters(&records, &config)), vec!["h-1", "h-3"]);
}

#[test]
fn conjunction_is_order_independent() {
    let records = fetched_collection();

    let forward = FilterConfig::new()
        .with(FilterField::Bed, "2")
        .with(FilterField::ApplicationFees, "No")
        .with(FilterField::Pets, "no");
    let backward = FilterConfig::new()
        .with(FilterField::Pets, "no")
        .with(FilterField::ApplicationFees, "No")
        .with(FilterField::Bed, "2");

    let forward_result = apply_filters(&records, &forward);
    assert_eq!(forward_result, apply_filters(&records, &backward));
    assert_eq!(ids(&forward_result), vec!["h-3"]);
}

#[test]
fn reapplying_a_configuration_changes_nothing() {
    let records = fetched_collection();
    let config = FilterConfig::new().with(FilterField::Pets, "yes");

    let once = apply_filters(&records, &config);
    assert_eq!(apply_filters(&once, &config), once);
}

#[test]
fn numeric_coercion_spans_wire_representations() {
    let records = fetched_collection();
    let config = FilterConfig::new().with(FilterField::Bed, "2");

    // JSON number 2 and string "2" both match; "two" never does.
    assert_eq!(ids(&apply_filters(&records, &config)), vec!["h-1", "h-3"]);
}

#[test]
fn substring_options_match_across_casing() {
    let records = fetched_collection();
    let config = FilterConfig::new().with(FilterField::Bathroom, "Walk-in Shower");

    assert_eq!(ids(&apply_filters(&records, &config)), vec!["h-2"]);
}

#[test]
fn filters_on_absent_fields_exclude_without_erroring() {
    let records = fetched_collection();
    let config = FilterConfig::new().with(FilterField::Mobility, "Non digital");

    assert!(apply_filters(&records, &config).is_empty());
}

#[test]
fn query_style_pairs_build_the_same_configuration() {
    let records = fetched_collection();
    let typed = FilterConfig::new()
        .with(FilterField::Bed, "2")
        .with(FilterField::Pets, "yes");
    let parsed = FilterConfig::from_pairs([("bed", "2"), ("pets", "yes"), ("bogus", "x")]);

    assert_eq!(typed, parsed);
    assert_eq!(ids(&apply_filters(&records, &parsed)), vec!["h-1"]);
}
