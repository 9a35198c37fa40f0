use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{CareListing, HousingListing};
use super::filter::{apply_filters, FilterConfig, FilterField, WILDCARD};
use super::source::{ListingSource, SourceError};
use super::store::ListingStore;

/// Service owning one snapshot store per collection plus the fetch source.
///
/// Stores are only ever replaced wholesale by a successful fetch; a failed
/// fetch leaves the previous snapshot (or initial emptiness) untouched, so
/// clients keep rendering a stale list instead of crashing.
pub struct ListingCatalogService<S> {
    source: Arc<S>,
    housing: Mutex<ListingStore<HousingListing>>,
    care: Mutex<ListingStore<CareListing>>,
}

impl<S: ListingSource> ListingCatalogService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            housing: Mutex::new(ListingStore::new()),
            care: Mutex::new(ListingStore::new()),
        }
    }

    /// Re-fetch the housing collection. On failure the previous snapshot is
    /// retained and the error is reported to the caller.
    pub fn refresh_housing(&self) -> Result<usize, SourceError> {
        match self.source.fetch_housing() {
            Ok(records) => {
                let count = records.len();
                let mut store = self.housing.lock().expect("housing store mutex poisoned");
                store.load(records);
                info!(count, "housing snapshot replaced");
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "housing fetch failed, keeping previous snapshot");
                Err(err)
            }
        }
    }

    /// Re-fetch the care collection with the same retention guarantee.
    pub fn refresh_care(&self) -> Result<usize, SourceError> {
        match self.source.fetch_care() {
            Ok(records) => {
                let count = records.len();
                let mut store = self.care.lock().expect("care store mutex poisoned");
                store.load(records);
                info!(count, "care snapshot replaced");
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "care fetch failed, keeping previous snapshot");
                Err(err)
            }
        }
    }

    /// Evaluate a filter configuration against the current housing snapshot.
    /// Recomputed in full on every call; the snapshot is not mutated.
    pub fn housing_page(&self, config: &FilterConfig) -> HousingPageView {
        let store = self.housing.lock().expect("housing store mutex poisoned");
        let listings = apply_filters(store.records(), config);
        HousingPageView {
            as_of: store.loaded_at(),
            total: store.len(),
            matched: listings.len(),
            listings,
        }
    }

    pub fn care_page(&self) -> CarePageView {
        let store = self.care.lock().expect("care store mutex poisoned");
        CarePageView {
            as_of: store.loaded_at(),
            total: store.len(),
            listings: store.records().to_vec(),
        }
    }
}

/// Option catalog for the selection UI: every field with its wildcard plus
/// closed option set.
pub fn filter_catalog() -> Vec<FilterFieldView> {
    FilterField::ALL
        .iter()
        .map(|field| FilterFieldView {
            key: field.key(),
            label: field.label(),
            options: std::iter::once(WILDCARD)
                .chain(field.options().iter().copied())
                .collect(),
        })
        .collect()
}

/// Filtered housing snapshot handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct HousingPageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub total: usize,
    pub matched: usize,
    pub listings: Vec<HousingListing>,
}

/// Care snapshot view; care listings are not filterable.
#[derive(Debug, Clone, Serialize)]
pub struct CarePageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub total: usize,
    pub listings: Vec<CareListing>,
}

/// One entry of the selection-input catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FilterFieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<&'static str>,
}
