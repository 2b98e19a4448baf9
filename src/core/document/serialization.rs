//! JSON serialization of documents

use super::types::Document;
use crate::utils::error::Result;

/// Renders documents in the registry's wire format
pub struct DocumentJsonWriter;

impl DocumentJsonWriter {
    pub fn write_document(document: &Document) -> Result<String> {
        Ok(serde_json::to_string(document)?)
    }

    pub fn read_document(json: &str) -> Result<Document> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `yyyy-MM-dd` dates, `null` when unset
pub(super) mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
