use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::listings::domain::{CareListing, FieldValue, HousingListing};
use crate::listings::source::{ListingSource, SourceError};

pub(super) fn housing(id: &str) -> HousingListing {
    HousingListing::new(id)
}

/// The §8-style fixture collection: mixed numeric shapes, mixed casing, and
/// one record with a malformed bed count.
pub(super) fn sample_listings() -> Vec<HousingListing> {
    vec![
        HousingListing {
            bed: Some(FieldValue::Number(2.0)),
            bath: Some(FieldValue::Number(1.0)),
            application_fees: Some(FieldValue::Number(0.0)),
            bathroom: Some("Bath Grab Bars or Reinforcements".to_string()),
            pets: Some("yes".to_string()),
            ..housing("h-1")
        },
        HousingListing {
            bed: Some(FieldValue::Number(3.0)),
            bath: Some(FieldValue::Text("2".to_string())),
            application_fees: Some(FieldValue::Text("35".to_string())),
            bathroom: Some("WALK-IN SHOWER with seat".to_string()),
            pets: Some("no".to_string()),
            ..housing("h-2")
        },
        HousingListing {
            bed: Some(FieldValue::Text("2".to_string())),
            bath: Some(FieldValue::Number(1.0)),
            application_fees: Some(FieldValue::Text("0".to_string())),
            pets: Some("No".to_string()),
            ..housing("h-3")
        },
        HousingListing {
            bed: Some(FieldValue::Text("two".to_string())),
            pets: Some("yes".to_string()),
            ..housing("h-4")
        },
        HousingListing {
            bed: Some(FieldValue::Number(5.0)),
            bath: Some(FieldValue::Number(3.0)),
            parking: Some("Off Street, behind the building".to_string()),
            age_requirement: Some("YES".to_string()),
            ..housing("h-5")
        },
    ]
}

pub(super) fn ids(listings: &[HousingListing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.0.as_str()).collect()
}

/// Source with swappable collections and a failure switch, so tests can
/// exercise both the replace and the retain-on-failure paths.
pub(super) struct ScriptedSource {
    housing: Mutex<Vec<HousingListing>>,
    care: Mutex<Vec<CareListing>>,
    failing: AtomicBool,
}

impl ScriptedSource {
    pub(super) fn new(housing: Vec<HousingListing>) -> Self {
        Self {
            housing: Mutex::new(housing),
            care: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub(super) fn set_housing(&self, housing: Vec<HousingListing>) {
        *self.housing.lock().expect("housing fixture mutex poisoned") = housing;
    }

    pub(super) fn set_care(&self, care: Vec<CareListing>) {
        *self.care.lock().expect("care fixture mutex poisoned") = care;
    }

    pub(super) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }
}

impl ListingSource for ScriptedSource {
    fn fetch_housing(&self) -> Result<Vec<HousingListing>, SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SourceError::Unavailable("scripted outage".to_string()));
        }
        Ok(self
            .housing
            .lock()
            .expect("housing fixture mutex poisoned")
            .clone())
    }

    fn fetch_care(&self) -> Result<Vec<CareListing>, SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SourceError::Unavailable("scripted outage".to_string()));
        }
        Ok(self
            .care
            .lock()
            .expect("care fixture mutex poisoned")
            .clone())
    }
}
