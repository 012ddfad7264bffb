//! Assembly charts (technological cards)

use super::{ISO_DATE, unwrap_envelope};
use crate::{ClientResult, IikoClient};
use chrono::NaiveDate;
use iiko_shared::Value;
use iiko_shared::models::AssemblyChart;

/// Period and options for fetching assembly charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyChartQuery {
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    /// Also return charts expanded down to final ingredients
    pub include_prepared_charts: bool,
    /// Include charts referring to deleted products
    pub include_deleted_products: bool,
}

impl AssemblyChartQuery {
    pub fn new(date_from: NaiveDate) -> Self {
        Self {
            date_from,
            date_to: None,
            include_prepared_charts: true,
            include_deleted_products: false,
        }
    }

    pub fn date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }

    pub fn include_prepared_charts(mut self, include: bool) -> Self {
        self.include_prepared_charts = include;
        self
    }

    pub fn include_deleted_products(mut self, include: bool) -> Self {
        self.include_deleted_products = include;
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("dateFrom", self.date_from.format(ISO_DATE).to_string())];
        if let Some(date_to) = self.date_to {
            query.push(("dateTo", date_to.format(ISO_DATE).to_string()));
        }
        // flags are only sent when set
        if self.include_prepared_charts {
            query.push(("includePreparedCharts", "true".to_string()));
        }
        if self.include_deleted_products {
            query.push(("includeDeletedProducts", "true".to_string()));
        }
        query
    }
}

/// Assembly chart endpoints
#[derive(Debug, Clone, Copy)]
pub struct AssemblyChartsEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> AssemblyChartsEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Charts whose validity intersects the period
    ///
    /// The answer holds `assemblyCharts` and, when requested, `preparedCharts`.
    pub async fn get_all(&self, query: &AssemblyChartQuery) -> ClientResult<Value> {
        self.client
            .get_json("/resto/api/v2/assemblyCharts/getAll", &query.to_query())
            .await
    }

    /// Save a chart; returns the chart as stored, with server-assigned IDs
    pub async fn save(&self, chart: &AssemblyChart) -> ClientResult<Value> {
        let raw = self
            .client
            .post_json("/resto/api/v2/assemblyCharts/save", chart)
            .await?;
        unwrap_envelope(raw, "Failed to save assembly chart")
    }
}
