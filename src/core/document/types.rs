//! Document types
//!
//! Field names match the registry's external JSON names. Unset fields are
//! emitted as explicit `null`s.

use super::serialization::date_format;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document submitted to the registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub description: Option<Description>,
    pub doc_id: Option<String>,
    pub doc_status: Option<String>,
    pub doc_type: Option<String>,
    #[serde(rename = "importRequest", default)]
    pub import_request: bool,
    pub owner_inn: Option<String>,
    pub participant_inn: Option<String>,
    pub producer_inn: Option<String>,
    #[serde(with = "date_format", default)]
    pub production_date: Option<NaiveDate>,
    /// Registry production code such as `OWN_PRODUCTION`, sent verbatim
    pub production_type: Option<String>,
    pub products: Option<Vec<Product>>,
    #[serde(with = "date_format", default)]
    pub reg_date: Option<NaiveDate>,
    pub reg_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: Option<String>,
}

/// Single product line of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: Option<String>,
    #[serde(with = "date_format", default)]
    pub certificate_document_date: Option<NaiveDate>,
    pub certificate_document_number: Option<String>,
    pub owner_inn: Option<String>,
    pub producer_inn: Option<String>,
    #[serde(with = "date_format", default)]
    pub production_date: Option<NaiveDate>,
    pub tnved_code: Option<String>,
    pub uit_code: Option<String>,
    pub uitu_code: Option<String>,
}
