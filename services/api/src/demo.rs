use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::infra::{load_housing_file, InMemoryListingSource};
use enable_listings::error::AppError;
use enable_listings::listings::{
    apply_filters, filter_catalog, CareListing, FilterConfig, FilterField, HousingListing,
    ListingCatalogService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional housing export (CSV or JSON) used instead of the bundled samples
    #[arg(long)]
    pub(crate) housing_data: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct HousingFilterArgs {
    /// Housing export file (CSV or JSON)
    #[arg(long)]
    pub(crate) data: PathBuf,
    /// Bedroom count (1, 2, 3, 4+)
    #[arg(long)]
    pub(crate) bed: Option<String>,
    /// Bathroom count (1, 2, 3+)
    #[arg(long)]
    pub(crate) bath: Option<String>,
    /// Application fees charged (Yes/No)
    #[arg(long)]
    pub(crate) application_fees: Option<String>,
    /// Kitchen accessibility feature
    #[arg(long)]
    pub(crate) kitchen: Option<String>,
    /// Bathroom accessibility feature
    #[arg(long)]
    pub(crate) bathroom: Option<String>,
    /// Parking arrangement
    #[arg(long)]
    pub(crate) parking: Option<String>,
    /// General accessibility feature
    #[arg(long)]
    pub(crate) mobility: Option<String>,
    /// Age requirement (yes/no)
    #[arg(long)]
    pub(crate) age_requirement: Option<String>,
    /// Income requirement (yes/no)
    #[arg(long)]
    pub(crate) income_requirement: Option<String>,
    /// Pets allowed (yes/no)
    #[arg(long)]
    pub(crate) pets: Option<String>,
}

impl HousingFilterArgs {
    fn config(&self) -> FilterConfig {
        let flags = [
            (FilterField::Bed, &self.bed),
            (FilterField::Bath, &self.bath),
            (FilterField::ApplicationFees, &self.application_fees),
            (FilterField::Kitchen, &self.kitchen),
            (FilterField::Bathroom, &self.bathroom),
            (FilterField::Parking, &self.parking),
            (FilterField::Mobility, &self.mobility),
            (FilterField::AgeRequirement, &self.age_requirement),
            (FilterField::IncomeRequirement, &self.income_requirement),
            (FilterField::Pets, &self.pets),
        ];

        let mut config = FilterConfig::new();
        for (field, value) in flags {
            if let Some(value) = value {
                config.select(field, value);
            }
        }
        config
    }
}

pub(crate) fn run_housing_filter(args: HousingFilterArgs) -> Result<(), AppError> {
    let listings = load_housing_file(&args.data)?;
    let config = args.config();
    let matched = apply_filters(&listings, &config);

    println!("{} of {} listings match", matched.len(), listings.len());
    for listing in &matched {
        print_housing_card(listing);
    }

    Ok(())
}

pub(crate) fn run_housing_options() {
    println!("Housing filter options");
    for field in filter_catalog() {
        println!("- {} ({})", field.label, field.key);
        for option in field.options {
            println!("    {option}");
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let source = InMemoryListingSource::with_samples();
    if let Some(path) = &args.housing_data {
        source.set_housing(load_housing_file(path)?);
    }
    let service = Arc::new(ListingCatalogService::new(Arc::new(source)));
    service.refresh_housing()?;
    service.refresh_care()?;

    println!("EnAble listing catalog demo");

    let all = service.housing_page(&FilterConfig::new());
    if let Some(at) = all.as_of {
        println!("snapshot taken {}", format_snapshot(at));
    }
    println!("\nHousing: {} listings fetched", all.total);
    for listing in &all.listings {
        print_housing_card(listing);
    }

    let config = FilterConfig::new().with(FilterField::Bed, "2");
    let page = service.housing_page(&config);
    println!("\nAfter selecting Bed = 2: {} of {} match", page.matched, page.total);
    for listing in &page.listings {
        print_housing_card(listing);
    }

    let config = config.with(FilterField::Pets, "yes");
    let page = service.housing_page(&config);
    println!(
        "\nAfter also selecting Pets = yes: {} of {} match",
        page.matched, page.total
    );
    for listing in &page.listings {
        print_housing_card(listing);
    }

    let mut config = config;
    config.reset();
    let page = service.housing_page(&config);
    println!(
        "\nAfter clearing every filter: {} of {} match",
        page.matched, page.total
    );

    let care = service.care_page();
    println!("\nCare services: {}", care.total);
    for listing in &care.listings {
        print_care_card(listing);
    }

    Ok(())
}

fn format_snapshot(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn print_housing_card(listing: &HousingListing) {
    println!(
        "- {} [{}]",
        listing.address.as_deref().unwrap_or("(address unknown)"),
        listing.id.0
    );
    if let Some(bed) = &listing.bed {
        println!("    bed: {}", bed.as_text());
    }
    if let Some(bath) = &listing.bath {
        println!("    bath: {}", bath.as_text());
    }
    if let Some(rent) = &listing.rent {
        println!("    rent: {}", rent.as_text());
    }
    if let Some(deposit) = &listing.deposit {
        println!("    deposit: {}", deposit.as_text());
    }
    if let Some(fees) = &listing.application_fees {
        println!("    application fees: {}", fees.as_text());
    }

    let features = [
        ("kitchen", &listing.kitchen),
        ("bathroom", &listing.bathroom),
        ("parking", &listing.parking),
        ("general accessibility", &listing.mobility),
        ("age requirement", &listing.age_requirement),
        ("income requirement", &listing.income_requirement),
        ("pets", &listing.pets),
    ];
    for (label, value) in features {
        if let Some(value) = value {
            println!("    {label}: {value}");
        }
    }

    if let Some(name) = &listing.contact_name {
        println!("    contact: {name}");
    }
    // Contact actions use the stored values verbatim.
    if let Some(phone) = &listing.contact_phone {
        println!("    call: tel:{phone}");
    }
    if let Some(email) = &listing.contact_email {
        println!("    email: mailto:{email}");
    }
}

fn print_care_card(listing: &CareListing) {
    println!(
        "- {} [{}]",
        listing.service_name.as_deref().unwrap_or("(unnamed service)"),
        listing.id.0
    );
    if let Some(link) = &listing.service_link {
        println!("    open: {link}");
    }
    if let Some(phone) = &listing.contact_phone {
        println!("    call: tel:{phone}");
    }
    if let Some(email) = &listing.contact_email {
        println!("    email: mailto:{email}");
    }
}
