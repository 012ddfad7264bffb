//! Nomenclature Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nomenclature item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Goods
    Goods,
    /// Dish
    Dish,
    /// Semi-finished product
    Prepared,
    Modifier,
    Service,
    /// Rate (child element of a service)
    Rate,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goods => "GOODS",
            Self::Dish => "DISH",
            Self::Prepared => "PREPARED",
            Self::Modifier => "MODIFIER",
            Self::Service => "SERVICE",
            Self::Rate => "RATE",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RGB color of a front button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Nomenclature item import payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent nomenclature group ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Button background color in the front application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Main measure unit ID (required)
    pub main_unit: String,
    /// Sections where the dish cannot be sold (dishes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_sections: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sale_price: Option<i64>,
    /// Cooking place type ID (dishes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_included_in_menu: Option<bool>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Unit weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_in_store_movement: Option<bool>,
}

impl Product {
    /// Create a payload with the required fields only
    pub fn new(name: impl Into<String>, main_unit: impl Into<String>, product_type: ProductType) -> Self {
        Self {
            name: name.into(),
            description: None,
            parent: None,
            modifiers: None,
            tax_category: None,
            category: None,
            color: None,
            font_color: None,
            front_image_id: None,
            position: None,
            main_unit: main_unit.into(),
            excluded_sections: None,
            default_sale_price: None,
            place_type: None,
            default_included_in_menu: None,
            product_type,
            unit_weight: None,
            unit_capacity: None,
            not_in_store_movement: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_tax_category(mut self, tax_category: impl Into<String>) -> Self {
        self.tax_category = Some(tax_category.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_colors(mut self, color: Color, font_color: Color) -> Self {
        self.color = Some(color);
        self.font_color = Some(font_color);
        self
    }

    pub fn with_default_sale_price(mut self, price: i64) -> Self {
        self.default_sale_price = Some(price);
        self
    }
}
