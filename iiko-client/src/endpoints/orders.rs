//! Menu change documents and price lists

use super::{ISO_DATE, unwrap_envelope};
use crate::{ClientError, ClientResult, IikoClient};
use chrono::NaiveDate;
use iiko_shared::Value;
use iiko_shared::models::MenuChangeOrder;

/// Price list period and departments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceListQuery {
    /// `YYYY-MM-DD`, required
    pub date_from: String,
    /// `YYYY-MM-DD`
    pub date_to: Option<String>,
    pub department_ids: Vec<String>,
}

impl PriceListQuery {
    pub fn new(date_from: impl Into<String>) -> Self {
        Self {
            date_from: date_from.into(),
            ..Default::default()
        }
    }

    pub fn date_to(mut self, date_to: impl Into<String>) -> Self {
        self.date_to = Some(date_to.into());
        self
    }

    pub fn department(mut self, department_id: impl Into<String>) -> Self {
        self.department_ids.push(department_id.into());
        self
    }

    /// Validate and build query parameters
    pub fn to_query(&self) -> ClientResult<Vec<(&'static str, String)>> {
        if self.date_from.trim().is_empty() {
            return Err(ClientError::validation("date_from must not be empty"));
        }
        let date_from = parse_iso_date("date_from", &self.date_from)?;

        let mut query = vec![("dateFrom", date_from.format(ISO_DATE).to_string())];
        if let Some(raw) = self.date_to.as_deref().filter(|d| !d.trim().is_empty()) {
            let date_to = parse_iso_date("date_to", raw)?;
            if date_to < date_from {
                return Err(ClientError::validation(
                    "date_from must be earlier than or equal to date_to",
                ));
            }
            query.push(("dateTo", date_to.format(ISO_DATE).to_string()));
        }
        query.extend(
            self.department_ids
                .iter()
                .map(|id| ("departmentId", id.clone())),
        );
        Ok(query)
    }
}

fn parse_iso_date(name: &str, raw: &str) -> ClientResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE)
        .map_err(|_| ClientError::validation(format!("{name} must be a YYYY-MM-DD date, got {raw:?}")))
}

/// Menu change document endpoints
#[derive(Debug, Clone, Copy)]
pub struct OrdersEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> OrdersEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Submit a menu change document
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] with the server's errors when the document is
    /// rejected, [`ClientError::InvalidResponse`] when the answer is not JSON.
    pub async fn set_new_order(&self, order: &MenuChangeOrder) -> ClientResult<Value> {
        let raw = self
            .client
            .post_json("/resto/api/v2/documents/menuChange", order)
            .await?;
        let payload = unwrap_envelope(raw, "Failed to create menu change order")?;
        tracing::info!(date = %order.date_incoming, items = order.items.len(), "Menu change order submitted");
        Ok(payload)
    }

    /// Prices in effect over a period
    pub async fn price_list(&self, query: &PriceListQuery) -> ClientResult<Value> {
        let query = query.to_query()?;
        self.client.get_json("/resto/api/v2/price", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_query_requires_date_from() {
        let err = PriceListQuery::new("").to_query().unwrap_err();
        assert!(err.to_string().to_lowercase().contains("date_from"));
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_price_query_rejects_malformed_dates() {
        assert!(PriceListQuery::new("01.01.2024").to_query().is_err());
        assert!(PriceListQuery::new("2024-01-10").date_to("2024-01-01").to_query().is_err());
    }

    #[test]
    fn test_price_query_parameters() {
        let query = PriceListQuery::new("2024-01-01")
            .date_to("2024-01-31")
            .department("dep-1")
            .department("dep-2")
            .to_query()
            .unwrap();
        assert_eq!(
            query,
            vec![
                ("dateFrom", "2024-01-01".to_string()),
                ("dateTo", "2024-01-31".to_string()),
                ("departmentId", "dep-1".to_string()),
                ("departmentId", "dep-2".to_string()),
            ]
        );
    }
}
