//! iiko Client - HTTP client for the iiko resto server API
//!
//! Opens short-lived sessions against `/resto/api`, turns XML and JSON
//! answers into plain records and maps business envelopes onto typed errors.
//!
//! ```no_run
//! # async fn run() -> iiko_client::ClientResult<()> {
//! use iiko_client::{ClientConfig, IikoApi};
//!
//! let api = IikoApi::new(&ClientConfig::from_env()?)?;
//! let roles = api.with_session(|| async { api.roles().list().await }).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod logger;
pub mod services;
pub mod util;

pub use api::IikoApi;
pub use config::{ClientConfig, hash_password};
pub use error::{ClientError, ClientResult, EntityKind};
pub use http::IikoClient;

pub use endpoints::{
    AssemblyChartQuery, AssemblyChartsEndpoints, EmployeesEndpoints, NomenclatureEndpoints,
    OlapEndpoints, OrdersEndpoints, PriceListQuery, ProductQuery, ReferencesEndpoints,
    ReportsEndpoints, RolesEndpoints, StoresEndpoints,
};
pub use services::PriceOrderService;
pub use util::sanitize_url;

// Re-export shared types for convenience
pub use iiko_shared::{self as shared, EnvelopeError, Record, Value, models};
