//! Filter evaluation engine for housing listings.
//!
//! Filtering is a pure conjunction: a record survives when every active
//! field's predicate accepts it. Evaluation is rerun in full after each
//! selection event; there is no incremental state to invalidate.

mod fields;
mod rules;

pub use fields::{FilterConfig, FilterField, FilterSelection, WILDCARD};

use crate::listings::domain::HousingListing;

impl FilterConfig {
    /// True when every active field's predicate accepts the record. A
    /// configuration with no active fields accepts everything.
    pub fn matches(&self, listing: &HousingListing) -> bool {
        self.active()
            .all(|(field, selection)| field_matches(field, selection, listing))
    }
}

fn field_matches(field: FilterField, selection: &str, listing: &HousingListing) -> bool {
    match field {
        FilterField::Bed => rules::numeric_matches(selection, listing.bed.as_ref()),
        FilterField::Bath => rules::numeric_matches(selection, listing.bath.as_ref()),
        FilterField::ApplicationFees => {
            rules::fee_matches(selection, listing.application_fees.as_ref())
        }
        FilterField::Kitchen => rules::contains_matches(selection, listing.kitchen.as_deref()),
        FilterField::Bathroom => rules::contains_matches(selection, listing.bathroom.as_deref()),
        FilterField::Parking => rules::contains_matches(selection, listing.parking.as_deref()),
        FilterField::Mobility => rules::contains_matches(selection, listing.mobility.as_deref()),
        FilterField::AgeRequirement => {
            rules::equals_matches(selection, listing.age_requirement.as_deref())
        }
        FilterField::IncomeRequirement => {
            rules::equals_matches(selection, listing.income_requirement.as_deref())
        }
        FilterField::Pets => rules::equals_matches(selection, listing.pets.as_deref()),
    }
}

/// Reduce a snapshot to the records matching every active filter.
///
/// Pure and order-preserving: neither input is mutated, survivors keep their
/// relative order, and the result is rebuilt in full on every call.
pub fn apply_filters(records: &[HousingListing], config: &FilterConfig) -> Vec<HousingListing> {
    records
        .iter()
        .filter(|listing| config.matches(listing))
        .cloned()
        .collect()
}
