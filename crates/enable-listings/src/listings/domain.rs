use serde::{Deserialize, Serialize};

/// Identifier assigned by the backing document store, unique within one
/// fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

/// Loosely typed scalar as delivered by the backing store.
///
/// Source documents are unvalidated external input: numeric fields arrive as
/// numbers, numeric strings, or free text depending on how the record was
/// entered. Coercion happens at the predicate boundary, never at
/// deserialization time, so a malformed value is a filter mismatch rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the scalar; `Text` parses after trimming. Non-numeric
    /// text yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }

    /// Display form, with whole numbers rendered without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(value) if value.fract() == 0.0 => format!("{value:.0}"),
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(raw) => raw.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::Text(raw.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// One housing unit record.
///
/// Accessibility features use the split per-category schema (`kitchen`,
/// `bathroom`, `parking`, `mobility`). Every field beyond `id` is optional
/// and tolerates missing, differently cased, or non-numeric content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingListing {
    pub id: ListingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bath: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_fees: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl HousingListing {
    /// Record with only an identifier; callers fill in the fields they have.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ListingId::new(id),
            address: None,
            image: None,
            bed: None,
            bath: None,
            rent: None,
            deposit: None,
            application_fees: None,
            kitchen: None,
            bathroom: None,
            parking: None,
            mobility: None,
            age_requirement: None,
            income_requirement: None,
            pets: None,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
        }
    }
}

/// One care-service record. Care listings carry no filterable attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareListing {
    pub id: ListingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl CareListing {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ListingId::new(id),
            service_name: None,
            service_link: None,
            image: None,
            contact_phone: None,
            contact_email: None,
        }
    }
}
