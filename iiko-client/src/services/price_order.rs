use crate::ClientResult;
use crate::endpoints::{ISO_DATE, OrdersEndpoints};
use chrono::NaiveDate;
use iiko_shared::Value;
use iiko_shared::models::{MenuChangeItem, MenuChangeOrder};

/// Sets menu prices through menu change documents
#[derive(Debug, Clone, Copy)]
pub struct PriceOrderService<'a> {
    orders: OrdersEndpoints<'a>,
}

impl<'a> PriceOrderService<'a> {
    pub fn new(orders: OrdersEndpoints<'a>) -> Self {
        Self { orders }
    }

    /// Build the document that [`set_price`](Self::set_price) submits
    pub fn build_order(items: Vec<MenuChangeItem>, order_date: NaiveDate) -> MenuChangeOrder {
        MenuChangeOrder::new(order_date.format(ISO_DATE).to_string()).with_items(items)
    }

    /// Submit new prices effective from `order_date`
    pub async fn set_price(&self, items: Vec<MenuChangeItem>, order_date: NaiveDate) -> ClientResult<Value> {
        let order = Self::build_order(items, order_date);
        tracing::debug!(date = %order.date_incoming, items = order.items.len(), "Submitting price order");
        self.orders.set_new_order(&order).await
    }
}
