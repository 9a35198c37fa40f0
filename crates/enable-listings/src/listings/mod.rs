//! Listing catalog: domain records, per-screen snapshot stores, the filter
//! evaluation engine, the fetch boundary, and the HTTP surface over them.

pub mod domain;
pub mod filter;
pub mod import;
pub mod router;
pub mod service;
pub mod source;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{CareListing, FieldValue, HousingListing, ListingId};
pub use filter::{apply_filters, FilterConfig, FilterField, FilterSelection, WILDCARD};
pub use import::ImportError;
pub use router::listing_router;
pub use service::{
    filter_catalog, CarePageView, FilterFieldView, HousingPageView, ListingCatalogService,
};
pub use source::{ListingSource, SourceError};
pub use store::ListingStore;
