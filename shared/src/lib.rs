//! Shared types for the iiko resto API client
//!
//! Wire models, the business response envelope and XML conversion.
//! Nothing here performs I/O.

pub mod envelope;
pub mod models;
pub mod xml;

// Re-exports
pub use envelope::{Envelope, EnvelopeError, EnvelopeOutcome};
pub use models::Record;
pub use serde_json::Value;
pub use xml::XmlError;
