//! Menu change document (price order) Model

use super::default_true;
use serde::{Deserialize, Serialize};

/// Line of a menu change document: sets the price of one product in one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChangeItem {
    pub department_id: String,
    pub product_id: String,
    /// Whether the product is included in the order
    #[serde(default = "default_true")]
    pub including: bool,
    pub price: i64,
    #[serde(default)]
    pub flyer_program: bool,
    #[serde(default)]
    pub dish_of_day: bool,
}

impl MenuChangeItem {
    pub fn new(department_id: impl Into<String>, product_id: impl Into<String>, price: i64) -> Self {
        Self {
            department_id: department_id.into(),
            product_id: product_id.into(),
            including: true,
            price,
            flyer_program: false,
            dish_of_day: false,
        }
    }
}

/// Document status. The server only accepts new documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuChangeStatus {
    #[default]
    New,
}

/// Menu change document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChangeOrder {
    #[serde(default)]
    pub status: MenuChangeStatus,
    /// Document date, `YYYY-MM-DD`
    pub date_incoming: String,
    #[serde(default)]
    pub short_name: String,
    /// Must stay false: true wipes the previous menu
    #[serde(default)]
    pub delete_previous_menu: bool,
    #[serde(default)]
    pub items: Vec<MenuChangeItem>,
}

impl MenuChangeOrder {
    pub fn new(date_incoming: impl Into<String>) -> Self {
        Self {
            status: MenuChangeStatus::New,
            date_incoming: date_incoming.into(),
            short_name: String::new(),
            delete_previous_menu: false,
            items: Vec::new(),
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub fn with_items(mut self, items: Vec<MenuChangeItem>) -> Self {
        self.items = items;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_defaults_on_the_wire() {
        let order = MenuChangeOrder::new("2024-12-23")
            .with_items(vec![MenuChangeItem::new("dep-1", "prod-1", 350)]);
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "NEW",
                "dateIncoming": "2024-12-23",
                "shortName": "",
                "deletePreviousMenu": false,
                "items": [{
                    "departmentId": "dep-1",
                    "productId": "prod-1",
                    "including": true,
                    "price": 350,
                    "flyerProgram": false,
                    "dishOfDay": false
                }]
            })
        );
    }

    #[test]
    fn test_item_defaults_when_reading() {
        let item: MenuChangeItem =
            serde_json::from_value(json!({"departmentId": "d", "productId": "p", "price": 10}))
                .unwrap();
        assert!(item.including);
        assert!(!item.flyer_program);
        assert!(!item.dish_of_day);
    }
}
