//! Per-resource endpoint groups
//!
//! Each group borrows the shared [`IikoClient`](crate::IikoClient) and maps
//! one area of the resto API. None of them opens a session on its own.

pub mod assembly_charts;
pub mod employees;
pub mod nomenclature;
pub mod olap;
pub mod orders;
pub mod references;
pub mod reports;
pub mod stores;

pub use assembly_charts::{AssemblyChartQuery, AssemblyChartsEndpoints};
pub use employees::{EmployeesEndpoints, RolesEndpoints};
pub use nomenclature::{NomenclatureEndpoints, ProductQuery};
pub use olap::OlapEndpoints;
pub use orders::{OrdersEndpoints, PriceListQuery};
pub use references::ReferencesEndpoints;
pub use reports::ReportsEndpoints;
pub use stores::StoresEndpoints;

use crate::{ClientError, ClientResult};
use iiko_shared::envelope::{self, EnvelopeOutcome};
use iiko_shared::{Record, Value, xml};

/// Date format of most query parameters
pub(crate) const ISO_DATE: &str = "%Y-%m-%d";

/// Parse an XML body into a plain value
pub(crate) fn parse_xml(body: &str) -> ClientResult<Value> {
    xml::parse(body)
        .map_err(|err| ClientError::invalid_response(format!("failed to parse XML response: {err}"), body))
}

/// Extract the `<root><item/>...</root>` collection of an XML body
///
/// A missing or empty root yields an empty list.
pub(crate) fn xml_records(body: &str, root: &str, item: &str) -> ClientResult<Vec<Record>> {
    let document = parse_xml(body)?;
    let items = match document.get(root) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(fields)) => fields.get(item).cloned(),
        Some(_) => {
            return Err(ClientError::invalid_response(
                format!("unexpected XML structure, expected {root}/{item}"),
                body,
            ));
        }
    };

    xml::into_list(items)
        .into_iter()
        .map(|value| match value {
            Value::Object(record) => Ok(record),
            _ => Err(ClientError::invalid_response(
                format!("unexpected XML structure, {item} is not an element with fields"),
                body,
            )),
        })
        .collect()
}

/// Extract the single `<root>` record of an XML body
pub(crate) fn xml_record(body: &str, root: &str) -> ClientResult<Option<Record>> {
    let document = parse_xml(body)?;
    match document.get(root) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(record)) => Ok(Some(record.clone())),
        Some(_) => Err(ClientError::invalid_response(
            format!("unexpected XML structure, expected {root}"),
            body,
        )),
    }
}

/// Interpret a JSON array of objects as records
pub(crate) fn json_records(value: Value) -> ClientResult<Vec<Record>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                other => Err(ClientError::invalid_response(
                    "expected a list of objects",
                    &other.to_string(),
                )),
            })
            .collect(),
        other => Err(ClientError::invalid_response(
            "expected a JSON list",
            &other.to_string(),
        )),
    }
}

/// Unwrap a business envelope, turning a rejection into [`ClientError::Api`]
pub(crate) fn unwrap_envelope(raw: Value, failure: &str) -> ClientResult<Value> {
    let outcome = envelope::interpret(raw)
        .map_err(|err| ClientError::InvalidResponse(format!("unexpected response envelope: {err}")))?;
    match outcome {
        EnvelopeOutcome::Success(payload) => Ok(payload),
        EnvelopeOutcome::Failure { result, errors } => {
            let summary = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::error!(result = ?result, errors = %summary, "{failure}");
            Err(ClientError::api(failure, errors))
        }
    }
}
