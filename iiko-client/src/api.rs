//! Entry point bundling the session client with every endpoint group

use crate::endpoints::{
    AssemblyChartsEndpoints, EmployeesEndpoints, NomenclatureEndpoints, OlapEndpoints,
    OrdersEndpoints, ReferencesEndpoints, ReportsEndpoints, RolesEndpoints, StoresEndpoints,
};
use crate::services::PriceOrderService;
use crate::{ClientConfig, ClientResult, IikoClient};
use std::future::Future;

/// Resto API facade
///
/// ```no_run
/// # async fn run() -> iiko_client::ClientResult<()> {
/// use iiko_client::{ClientConfig, IikoApi};
///
/// let config = ClientConfig::new("https://resto.example.com", "api", "")
///     .with_password("secret");
/// let api = IikoApi::new(&config)?;
/// let employees = api
///     .with_session(|| async { api.employees().list().await })
///     .await?;
/// println!("{} employees", employees.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IikoApi {
    client: IikoClient,
}

impl IikoApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: IikoClient::new(config)?,
        })
    }

    /// Underlying session client
    pub fn client(&self) -> &IikoClient {
        &self.client
    }

    pub async fn login(&self) -> ClientResult<String> {
        self.client.login().await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.client.logout().await
    }

    /// See [`IikoClient::with_session`]
    pub async fn with_session<F, Fut, T>(&self, f: F) -> ClientResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        self.client.with_session(f).await
    }

    pub fn employees(&self) -> EmployeesEndpoints<'_> {
        EmployeesEndpoints::new(&self.client)
    }

    pub fn roles(&self) -> RolesEndpoints<'_> {
        RolesEndpoints::new(&self.client)
    }

    pub fn reports(&self) -> ReportsEndpoints<'_> {
        ReportsEndpoints::new(&self.client)
    }

    pub fn olap(&self) -> OlapEndpoints<'_> {
        OlapEndpoints::new(&self.client)
    }

    pub fn nomenclature(&self) -> NomenclatureEndpoints<'_> {
        NomenclatureEndpoints::new(&self.client)
    }

    pub fn assembly_charts(&self) -> AssemblyChartsEndpoints<'_> {
        AssemblyChartsEndpoints::new(&self.client)
    }

    pub fn references(&self) -> ReferencesEndpoints<'_> {
        ReferencesEndpoints::new(&self.client)
    }

    pub fn orders(&self) -> OrdersEndpoints<'_> {
        OrdersEndpoints::new(&self.client)
    }

    pub fn stores(&self) -> StoresEndpoints<'_> {
        StoresEndpoints::new(&self.client)
    }

    pub fn price_orders(&self) -> PriceOrderService<'_> {
        PriceOrderService::new(self.orders())
    }
}
