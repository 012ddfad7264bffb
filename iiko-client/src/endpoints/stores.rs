//! Stores and stock balances

use super::{ISO_DATE, xml_records};
use crate::{ClientResult, IikoClient};
use chrono::{Local, NaiveDateTime};
use iiko_shared::{Record, Value};

/// Timestamp format accepted by the balance report
pub const BALANCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Store endpoints
#[derive(Debug, Clone, Copy)]
pub struct StoresEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> StoresEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// All stores of the corporation
    pub async fn list(&self) -> ClientResult<Vec<Record>> {
        let body = self
            .client
            .get_text("/resto/api/corporation/stores", &[])
            .await?;
        xml_records(&body, "corporateItemDtoes", "corporateItemDto")
    }

    /// Stock balances at a moment; `None` means today
    pub async fn balance(&self, timestamp: Option<NaiveDateTime>) -> ClientResult<Value> {
        let query = [("timestamp", balance_timestamp(timestamp))];
        self.client
            .get_json("/resto/api/v2/reports/balance/stores", &query)
            .await
    }
}

fn balance_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(at) => at.format(BALANCE_TIMESTAMP_FORMAT).to_string(),
        None => Local::now().date_naive().format(ISO_DATE).to_string(),
    }
}
