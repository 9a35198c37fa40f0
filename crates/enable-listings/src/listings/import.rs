//! Parsers turning listing exports into domain records, used by the
//! file-backed fetch sources and the CLI.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::{CareListing, FieldValue, HousingListing, ListingId};

/// Error raised while decoding a listing export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read listing export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV listing export: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON listing export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported listing export shape: expected an array or object, got {0}")]
    UnexpectedShape(&'static str),
}

/// Parse a housing CSV export. Blank cells become absent fields; rows
/// without an `id` cell fall back to a row-derived identifier.
pub fn housing_from_csv<R: Read>(reader: R) -> Result<Vec<HousingListing>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut listings = Vec::new();
    for (index, row) in csv_reader.deserialize::<HousingRow>().enumerate() {
        listings.push(row?.into_listing(index));
    }

    Ok(listings)
}

/// Parse a housing JSON export: either an array of listing documents or a
/// document-store style `{id: document}` map, where the key supplies the id.
pub fn housing_from_json<R: Read>(reader: R) -> Result<Vec<HousingListing>, ImportError> {
    collection_from_json(reader)
}

/// Care counterpart of [`housing_from_json`].
pub fn care_from_json<R: Read>(reader: R) -> Result<Vec<CareListing>, ImportError> {
    collection_from_json(reader)
}

fn collection_from_json<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, ImportError> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(map) => {
            let mut records = Vec::with_capacity(map.len());
            for (id, mut document) in map {
                if let Value::Object(ref mut fields) = document {
                    fields.entry("id").or_insert(Value::String(id));
                }
                records.push(serde_json::from_value(document)?);
            }
            Ok(records)
        }
        Value::Null => Err(ImportError::UnexpectedShape("null")),
        Value::Bool(_) => Err(ImportError::UnexpectedShape("boolean")),
        Value::Number(_) => Err(ImportError::UnexpectedShape("number")),
        Value::String(_) => Err(ImportError::UnexpectedShape("string")),
    }
}

#[derive(Debug, Deserialize)]
struct HousingRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bath: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    deposit: Option<String>,
    #[serde(
        rename = "applicationFees",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    application_fees: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    kitchen: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bathroom: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    parking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    mobility: Option<String>,
    #[serde(
        rename = "ageRequirement",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    age_requirement: Option<String>,
    #[serde(
        rename = "incomeRequirement",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    income_requirement: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pets: Option<String>,
    #[serde(
        rename = "contactName",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    contact_name: Option<String>,
    #[serde(
        rename = "contactPhone",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    contact_phone: Option<String>,
    #[serde(
        rename = "contactEmail",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    contact_email: Option<String>,
}

impl HousingRow {
    fn into_listing(self, index: usize) -> HousingListing {
        HousingListing {
            id: ListingId::new(
                self.id
                    .unwrap_or_else(|| format!("row-{:04}", index + 1)),
            ),
            address: self.address,
            image: self.image,
            bed: self.bed.map(FieldValue::Text),
            bath: self.bath.map(FieldValue::Text),
            rent: self.rent.map(FieldValue::Text),
            deposit: self.deposit.map(FieldValue::Text),
            application_fees: self.application_fees.map(FieldValue::Text),
            kitchen: self.kitchen,
            bathroom: self.bathroom,
            parking: self.parking,
            mobility: self.mobility,
            age_requirement: self.age_requirement,
            income_requirement: self.income_requirement,
            pets: self.pets,
            contact_name: self.contact_name,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
