//! Test fixtures and data factories

use chrono::NaiveDate;
use crpt_api::{Description, Document, Product};

/// Factory for creating test documents
pub struct DocumentFactory;

impl DocumentFactory {
    /// Document with every field populated
    pub fn complete() -> Document {
        let date = NaiveDate::from_ymd_opt(2021, 1, 23).unwrap();
        Document {
            description: Some(Description {
                participant_inn: Some("7700000000".to_string()),
            }),
            doc_id: Some("doc-42".to_string()),
            doc_status: Some("DRAFT".to_string()),
            doc_type: Some("LP_INTRODUCE_GOODS".to_string()),
            import_request: true,
            owner_inn: Some("7700000001".to_string()),
            participant_inn: Some("7700000000".to_string()),
            producer_inn: Some("7700000002".to_string()),
            production_date: Some(date),
            production_type: Some("OWN_PRODUCTION".to_string()),
            products: Some(vec![Self::product()]),
            reg_date: Some(date),
            reg_number: Some("REG-1".to_string()),
        }
    }

    /// Document with only an id
    pub fn minimal(doc_id: &str) -> Document {
        Document {
            doc_id: Some(doc_id.to_string()),
            ..Default::default()
        }
    }

    pub fn product() -> Product {
        Product {
            certificate_document: Some("CONFORMITY_CERTIFICATE".to_string()),
            certificate_document_date: NaiveDate::from_ymd_opt(2020, 12, 1),
            certificate_document_number: Some("RU-1".to_string()),
            owner_inn: Some("7700000001".to_string()),
            producer_inn: Some("7700000002".to_string()),
            production_date: NaiveDate::from_ymd_opt(2021, 1, 23),
            tnved_code: Some("6401100000".to_string()),
            uit_code: Some("0104630034070012".to_string()),
            uitu_code: None,
        }
    }
}
