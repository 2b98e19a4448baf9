//! Registry document model and its JSON representation

mod serialization;
mod types;


pub use serialization::DocumentJsonWriter;
pub use types::{Description, Document, Product};
