use std::sync::Arc;

use super::common::*;
use crate::listings::domain::CareListing;
use crate::listings::filter::FilterConfig;
use crate::listings::service::ListingCatalogService;
use crate::listings::source::SourceError;
use crate::listings::store::ListingStore;

#[test]
fn store_is_empty_until_first_load() {
    let store: ListingStore<crate::listings::domain::HousingListing> = ListingStore::new();

    assert!(store.is_empty());
    assert!(store.records().is_empty());
    assert!(store.loaded_at().is_none());
}

#[test]
fn load_replaces_the_whole_snapshot() {
    let mut store = ListingStore::new();
    store.load(sample_listings());
    assert_eq!(store.len(), 5);

    store.load(vec![housing("solo")]);

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id.0, "solo");
    assert!(store.loaded_at().is_some());
}

#[test]
fn refresh_replaces_the_service_snapshot() {
    let source = Arc::new(ScriptedSource::new(sample_listings()));
    let service = ListingCatalogService::new(source.clone());

    let count = service.refresh_housing().expect("fetch succeeds");
    assert_eq!(count, 5);

    source.set_housing(vec![housing("h-9")]);
    service.refresh_housing().expect("fetch succeeds");

    let page = service.housing_page(&FilterConfig::new());
    assert_eq!(page.total, 1);
    assert_eq!(page.listings[0].id.0, "h-9");
}

#[test]
fn failed_fetch_retains_the_previous_snapshot() {
    let source = Arc::new(ScriptedSource::new(sample_listings()));
    let service = ListingCatalogService::new(source.clone());
    service.refresh_housing().expect("initial fetch succeeds");
    let before = service.housing_page(&FilterConfig::new());

    source.set_failing(true);
    let err = service.refresh_housing().expect_err("fetch fails");
    assert!(matches!(err, SourceError::Unavailable(_)));

    let after = service.housing_page(&FilterConfig::new());
    assert_eq!(after.total, before.total);
    assert_eq!(after.listings, before.listings);
    assert_eq!(after.as_of, before.as_of);
}

#[test]
fn failed_first_fetch_leaves_the_store_empty_not_broken() {
    let source = Arc::new(ScriptedSource::new(sample_listings()));
    source.set_failing(true);
    let service = ListingCatalogService::new(source);

    service.refresh_housing().expect_err("fetch fails");

    let page = service.housing_page(&FilterConfig::new());
    assert_eq!(page.total, 0);
    assert!(page.listings.is_empty());
    assert!(page.as_of.is_none());
}

#[test]
fn care_refresh_has_the_same_retention_guarantee() {
    let source = Arc::new(ScriptedSource::new(Vec::new()));
    source.set_care(vec![CareListing {
        service_name: Some("Respite Care Network".to_string()),
        ..CareListing::new("c-1")
    }]);
    let service = ListingCatalogService::new(source.clone());
    service.refresh_care().expect("initial fetch succeeds");

    source.set_failing(true);
    service.refresh_care().expect_err("fetch fails");

    let page = service.care_page();
    assert_eq!(page.total, 1);
    assert_eq!(
        page.listings[0].service_name.as_deref(),
        Some("Respite Care Network")
    );
}
