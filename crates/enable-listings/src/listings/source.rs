use super::domain::{CareListing, HousingListing};

/// Fetch collaborator boundary: supplies the full contents of one named
/// collection on demand.
///
/// Implementations either deliver a complete snapshot or fail; a partially
/// filled collection never crosses this boundary.
pub trait ListingSource: Send + Sync {
    fn fetch_housing(&self) -> Result<Vec<HousingListing>, SourceError>;
    fn fetch_care(&self) -> Result<Vec<CareListing>, SourceError>;
}

/// Error raised by a listing source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("listing source unavailable: {0}")]
    Unavailable(String),
    #[error("listing source returned malformed data: {0}")]
    Malformed(String),
}
