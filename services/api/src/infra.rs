use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use enable_listings::listings::{
    import, CareListing, FieldValue, HousingListing, ImportError, ListingSource, SourceError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Source backed by fixed in-memory collections. The failure switch lets the
/// demo and the route tests walk the stale-snapshot path.
#[derive(Default)]
pub(crate) struct InMemoryListingSource {
    housing: Mutex<Vec<HousingListing>>,
    care: Mutex<Vec<CareListing>>,
    failing: AtomicBool,
}

impl InMemoryListingSource {
    pub(crate) fn with_samples() -> Self {
        let source = Self::default();
        source.set_housing(sample_housing());
        source.set_care(sample_care());
        source
    }

    pub(crate) fn set_housing(&self, housing: Vec<HousingListing>) {
        *self.housing.lock().expect("housing mutex poisoned") = housing;
    }

    pub(crate) fn set_care(&self, care: Vec<CareListing>) {
        *self.care.lock().expect("care mutex poisoned") = care;
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }
}

impl ListingSource for InMemoryListingSource {
    fn fetch_housing(&self) -> Result<Vec<HousingListing>, SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SourceError::Unavailable("simulated outage".to_string()));
        }
        Ok(self.housing.lock().expect("housing mutex poisoned").clone())
    }

    fn fetch_care(&self) -> Result<Vec<CareListing>, SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SourceError::Unavailable("simulated outage".to_string()));
        }
        Ok(self.care.lock().expect("care mutex poisoned").clone())
    }
}

/// Source reading export files from disk on every fetch, so a refresh picks
/// up edits to the files. Format is chosen by extension: `.csv` for housing
/// exports, anything else parsed as JSON.
pub(crate) struct FileListingSource {
    housing_path: Option<PathBuf>,
    care_path: Option<PathBuf>,
}

impl FileListingSource {
    pub(crate) fn new(housing_path: Option<PathBuf>, care_path: Option<PathBuf>) -> Self {
        Self {
            housing_path,
            care_path,
        }
    }
}

impl ListingSource for FileListingSource {
    fn fetch_housing(&self) -> Result<Vec<HousingListing>, SourceError> {
        match &self.housing_path {
            None => Ok(Vec::new()),
            Some(path) => load_housing_file(path).map_err(to_source_error),
        }
    }

    fn fetch_care(&self) -> Result<Vec<CareListing>, SourceError> {
        match &self.care_path {
            None => Ok(Vec::new()),
            Some(path) => load_care_file(path).map_err(to_source_error),
        }
    }
}

/// Sum of the configured source kinds, so the server can hold one concrete
/// service type regardless of where listings come from.
pub(crate) enum CatalogSource {
    Memory(InMemoryListingSource),
    File(FileListingSource),
}

impl ListingSource for CatalogSource {
    fn fetch_housing(&self) -> Result<Vec<HousingListing>, SourceError> {
        match self {
            CatalogSource::Memory(source) => source.fetch_housing(),
            CatalogSource::File(source) => source.fetch_housing(),
        }
    }

    fn fetch_care(&self) -> Result<Vec<CareListing>, SourceError> {
        match self {
            CatalogSource::Memory(source) => source.fetch_care(),
            CatalogSource::File(source) => source.fetch_care(),
        }
    }
}

pub(crate) fn load_housing_file(path: &Path) -> Result<Vec<HousingListing>, ImportError> {
    let file = File::open(path)?;
    if has_extension(path, "csv") {
        import::housing_from_csv(file)
    } else {
        import::housing_from_json(file)
    }
}

pub(crate) fn load_care_file(path: &Path) -> Result<Vec<CareListing>, ImportError> {
    let file = File::open(path)?;
    import::care_from_json(file)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn to_source_error(err: ImportError) -> SourceError {
    match err {
        ImportError::Io(io) => SourceError::Unavailable(io.to_string()),
        other => SourceError::Malformed(other.to_string()),
    }
}

/// Bundled sample collections used when no data files are configured.
pub(crate) fn sample_housing() -> Vec<HousingListing> {
    vec![
        HousingListing {
            address: Some("1201 Prairie View Dr".to_string()),
            image: Some("https://example.org/img/prairie-view.jpg".to_string()),
            bed: Some(FieldValue::Number(2.0)),
            bath: Some(FieldValue::Number(1.0)),
            rent: Some(FieldValue::Number(925.0)),
            deposit: Some(FieldValue::Number(925.0)),
            application_fees: Some(FieldValue::Number(0.0)),
            kitchen: Some("Front Controls on Stove/Cook-top".to_string()),
            bathroom: Some("Walk-in Shower, Bath Grab Bars or Reinforcements".to_string()),
            parking: Some("off street".to_string()),
            mobility: Some("Non digital Kitchen appliances".to_string()),
            age_requirement: Some("no".to_string()),
            income_requirement: Some("yes".to_string()),
            pets: Some("yes".to_string()),
            contact_name: Some("Dana Whitfield".to_string()),
            contact_phone: Some("515-555-0142".to_string()),
            contact_email: Some("dana@prairieviewhomes.example".to_string()),
            ..HousingListing::new("sample-h-1")
        },
        HousingListing {
            address: Some("47 Riverside Ter".to_string()),
            bed: Some(FieldValue::Text("3".to_string())),
            bath: Some(FieldValue::Text("2".to_string())),
            rent: Some(FieldValue::Text("1250".to_string())),
            deposit: Some(FieldValue::Text("1250".to_string())),
            application_fees: Some(FieldValue::Text("40".to_string())),
            bathroom: Some("Accessible Height Toilet, Lever Handles on Doors and Faucets".to_string()),
            parking: Some("infront of unit".to_string()),
            age_requirement: Some("no".to_string()),
            income_requirement: Some("no".to_string()),
            pets: Some("no".to_string()),
            contact_name: Some("Marcus Lee".to_string()),
            contact_phone: Some("515-555-0187".to_string()),
            contact_email: Some("marcus@riversideter.example".to_string()),
            ..HousingListing::new("sample-h-2")
        },
        HousingListing {
            address: Some("880 Summit Ridge Apt 4".to_string()),
            bed: Some(FieldValue::Number(4.0)),
            bath: Some(FieldValue::Number(3.0)),
            rent: Some(FieldValue::Number(1675.0)),
            application_fees: Some(FieldValue::Number(25.0)),
            parking: Some("on street".to_string()),
            age_requirement: Some("yes".to_string()),
            pets: Some("no".to_string()),
            contact_name: Some("Priya Raman".to_string()),
            contact_phone: Some("515-555-0110".to_string()),
            ..HousingListing::new("sample-h-3")
        },
    ]
}

pub(crate) fn sample_care() -> Vec<CareListing> {
    vec![
        CareListing {
            service_name: Some("Independent Living Support".to_string()),
            service_link: Some("https://example.org/independent-living".to_string()),
            contact_phone: Some("515-555-0171".to_string()),
            contact_email: Some("support@ilcenter.example".to_string()),
            ..CareListing::new("sample-c-1")
        },
        CareListing {
            service_name: Some("Accessible Transit Rides".to_string()),
            service_link: Some("https://example.org/transit-rides".to_string()),
            contact_phone: Some("515-555-0133".to_string()),
            ..CareListing::new("sample-c-2")
        },
    ]
}
