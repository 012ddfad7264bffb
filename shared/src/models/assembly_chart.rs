//! Assembly chart (technological card) Model

use serde::{Deserialize, Serialize};

/// How stock is written off when the assembled product is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductWriteoffStrategy {
    /// Write off the assembled dish
    Assemble,
    /// Write off the ingredients
    Direct,
}

/// Chart strategy across dish sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSizeAssemblyStrategy {
    /// One chart for all sizes
    Common,
    /// A chart per size
    Individual,
}

/// Subset of departments a chart line applies to
///
/// `inverse = false` includes the listed departments, `true` excludes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSpecification {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub inverse: bool,
}

/// Ingredient line of an assembly chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyChartItem {
    #[serde(default)]
    pub sort_weight: i32,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_size_specification: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_specification: Option<StoreSpecification>,
    #[serde(default)]
    pub amount_in: f64,
    // always sent: the server rejects null here
    #[serde(default)]
    pub amount_middle: f64,
    #[serde(default)]
    pub amount_out: f64,
    #[serde(default)]
    pub amount_in1: f64,
    #[serde(default)]
    pub amount_out1: f64,
    #[serde(default)]
    pub amount_in2: f64,
    #[serde(default)]
    pub amount_out2: f64,
    #[serde(default)]
    pub amount_in3: f64,
    #[serde(default)]
    pub amount_out3: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type_id: Option<String>,
}

impl AssemblyChartItem {
    /// Item with gross and net amounts; `amount_middle` and the per-size
    /// amounts stay at zero
    pub fn new(product_id: impl Into<String>, amount_in: f64, amount_out: f64) -> Self {
        Self {
            product_id: product_id.into(),
            amount_in,
            amount_out,
            ..Default::default()
        }
    }
}

/// Assembly chart save payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyChart {
    pub assembled_product_id: String,
    /// `YYYY-MM-DD`
    pub date_from: String,
    /// `YYYY-MM-DD`; unset means open-ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub assembled_amount: f64,
    pub product_writeoff_strategy: ProductWriteoffStrategy,
    pub effective_direct_writeoff_store_specification: StoreSpecification,
    pub product_size_assembly_strategy: ProductSizeAssemblyStrategy,
    pub items: Vec<AssemblyChartItem>,
    #[serde(default)]
    pub technology_description: String,
    #[serde(default)]
    pub description: String,
    /// Presentation requirements
    #[serde(default)]
    pub appearance: String,
    #[serde(default)]
    pub organoleptic: String,
    #[serde(default)]
    pub output_comment: String,
}

impl AssemblyChart {
    /// Chart writing off ingredients, common to all sizes
    pub fn new(
        assembled_product_id: impl Into<String>,
        date_from: impl Into<String>,
        assembled_amount: f64,
        items: Vec<AssemblyChartItem>,
    ) -> Self {
        Self {
            assembled_product_id: assembled_product_id.into(),
            date_from: date_from.into(),
            date_to: None,
            assembled_amount,
            product_writeoff_strategy: ProductWriteoffStrategy::Direct,
            effective_direct_writeoff_store_specification: StoreSpecification::default(),
            product_size_assembly_strategy: ProductSizeAssemblyStrategy::Common,
            items,
            technology_description: String::new(),
            description: String::new(),
            appearance: String::new(),
            organoleptic: String::new(),
            output_comment: String::new(),
        }
    }
}
