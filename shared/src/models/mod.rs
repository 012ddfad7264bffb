//! Request models
//!
//! Payloads sent to the resto API. Field names follow the server's camelCase
//! wire format; optional fields are omitted when unset.
//! Responses are not modelled: endpoints hand back plain [`Record`]s.

pub mod assembly_chart;
pub mod menu_change;
pub mod product;
pub mod reference;

// Re-exports
pub use assembly_chart::*;
pub use menu_change::*;
pub use product::*;
pub use reference::*;

/// Plain mapping returned by list and detail operations
pub type Record = serde_json::Map<String, serde_json::Value>;

pub(crate) fn default_true() -> bool {
    true
}
