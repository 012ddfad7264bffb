//! Sales reports (XML)

use super::xml_records;
use crate::{ClientError, ClientResult, IikoClient};
use chrono::NaiveDate;
use iiko_shared::{Record, Value};
use std::collections::BTreeMap;

/// Date format of the sales report, both in the query and in the answer
pub const SALES_DATE_FORMAT: &str = "%d.%m.%Y";

/// Report endpoints
#[derive(Debug, Clone, Copy)]
pub struct ReportsEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> ReportsEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Daily revenue of a department as the server reports it
    ///
    /// Every record holds at least `date` (`DD.MM.YYYY`) and `value`.
    /// `date_to` is inclusive.
    pub async fn sales(
        &self,
        department_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> ClientResult<Vec<Record>> {
        if department_id.trim().is_empty() {
            return Err(ClientError::validation("department_id must not be empty"));
        }
        if date_from > date_to {
            return Err(ClientError::validation(
                "date_from must be earlier than or equal to date_to",
            ));
        }

        let query = [
            ("department", department_id.to_string()),
            ("dateFrom", date_from.format(SALES_DATE_FORMAT).to_string()),
            ("dateTo", date_to.format(SALES_DATE_FORMAT).to_string()),
            ("allRevenue", "false".to_string()),
        ];
        let body = self.client.get_text("/resto/api/reports/sales", &query).await?;
        xml_records(&body, "dayDishValues", "dayDishValue")
    }

    /// Daily revenue of a department keyed by date
    pub async fn sales_by_day(
        &self,
        department_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> ClientResult<BTreeMap<NaiveDate, f64>> {
        let days = self.sales(department_id, date_from, date_to).await?;
        aggregate_by_day(&days)
    }
}

/// Map each `date` to its `value`; a missing value counts as zero
///
/// When a date repeats, the last entry wins.
pub fn aggregate_by_day(days: &[Record]) -> ClientResult<BTreeMap<NaiveDate, f64>> {
    let mut totals = BTreeMap::new();
    for day in days {
        let date = match day.get("date") {
            Some(Value::String(raw)) => NaiveDate::parse_from_str(raw.trim(), SALES_DATE_FORMAT)
                .map_err(|err| {
                    ClientError::InvalidResponse(format!("bad sales report date {raw:?}: {err}"))
                })?,
            other => {
                return Err(ClientError::InvalidResponse(format!(
                    "sales report entry without a date: {other:?}"
                )));
            }
        };

        let value = match day.get("value") {
            None | Some(Value::Null) => 0.0,
            Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
            Some(Value::String(raw)) => raw.trim().parse::<f64>().map_err(|err| {
                ClientError::InvalidResponse(format!("bad sales report value {raw:?}: {err}"))
            })?,
            Some(other) => {
                return Err(ClientError::InvalidResponse(format!(
                    "bad sales report value: {other}"
                )));
            }
        };

        totals.insert(date, value);
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_aggregate_by_day() {
        let days = vec![
            record(json!({"date": "01.03.2024", "value": "1500.50"})),
            record(json!({"date": "02.03.2024", "value": "200"})),
            record(json!({"date": "03.03.2024"})),
        ];
        let totals = aggregate_by_day(&days).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[&day(1)], 1500.5);
        assert_eq!(totals[&day(2)], 200.0);
        assert_eq!(totals[&day(3)], 0.0);
    }

    #[test]
    fn test_aggregate_repeated_date_keeps_last() {
        let days = vec![
            record(json!({"date": "01.03.2024", "value": "10"})),
            record(json!({"date": "01.03.2024", "value": "5"})),
            record(json!({"date": "02.03.2024", "value": null})),
        ];
        let totals = aggregate_by_day(&days).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&day(1)], 5.0);
        assert_eq!(totals[&day(2)], 0.0);
    }

    #[test]
    fn test_aggregate_rejects_bad_entries() {
        let bad_date = vec![record(json!({"date": "2024-03-01", "value": "1"}))];
        assert!(matches!(aggregate_by_day(&bad_date), Err(ClientError::InvalidResponse(_))));

        let bad_value = vec![record(json!({"date": "01.03.2024", "value": "abc"}))];
        assert!(matches!(aggregate_by_day(&bad_value), Err(ClientError::InvalidResponse(_))));

        let no_date = vec![record(json!({"value": "1"}))];
        assert!(aggregate_by_day(&no_date).is_err());
    }
}
