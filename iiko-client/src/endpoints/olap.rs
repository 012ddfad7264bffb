//! OLAP reports by preset

use super::ISO_DATE;
use crate::{ClientError, ClientResult, IikoClient};
use chrono::{Duration, Local, NaiveDate};
use iiko_shared::Value;
use uuid::Uuid;

/// OLAP endpoints
#[derive(Debug, Clone, Copy)]
pub struct OlapEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> OlapEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Run a preconfigured OLAP report
    ///
    /// `date_from` is included, `date_to` is not. They default to today and
    /// tomorrow and must differ.
    pub async fn by_preset(
        &self,
        preset_id: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> ClientResult<Value> {
        let (preset_id, date_from, date_to) =
            resolve_preset_request(preset_id, date_from, date_to, Local::now().date_naive())?;

        let path = format!("/resto/api/v2/reports/olap/byPresetId/{preset_id}");
        let query = [
            ("dateFrom", date_from.format(ISO_DATE).to_string()),
            ("dateTo", date_to.format(ISO_DATE).to_string()),
        ];
        self.client.get_json(&path, &query).await
    }
}

fn resolve_preset_request(
    preset_id: &str,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    today: NaiveDate,
) -> ClientResult<(Uuid, NaiveDate, NaiveDate)> {
    let preset_id = Uuid::parse_str(preset_id.trim())
        .map_err(|_| ClientError::validation(format!("preset_id must be a UUID, got {preset_id:?}")))?;

    if let (Some(from), Some(to)) = (date_from, date_to) {
        if from == to {
            return Err(ClientError::validation("date_from and date_to must differ"));
        }
        if from > to {
            return Err(ClientError::validation("date_from must be earlier than date_to"));
        }
    }

    let date_from = date_from.unwrap_or(today);
    let date_to = date_to.unwrap_or(today + Duration::days(1));
    Ok((preset_id, date_from, date_to))
}
