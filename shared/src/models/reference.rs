//! Reference book types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root type of a reference book served by `/resto/api/v2/entities/list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    MeasureUnit,
    TaxCategory,
    AccountingCategory,
    /// User-defined product categories
    ProductCategory,
}

impl ReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeasureUnit => "MeasureUnit",
            Self::TaxCategory => "TaxCategory",
            Self::AccountingCategory => "AccountingCategory",
            Self::ProductCategory => "ProductCategory",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
