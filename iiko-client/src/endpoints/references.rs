//! Reference books

use super::json_records;
use crate::{ClientResult, IikoClient};
use iiko_shared::Record;
use iiko_shared::models::ReferenceType;

/// Reference book endpoints
#[derive(Debug, Clone, Copy)]
pub struct ReferencesEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> ReferencesEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Entries of one reference book
    pub async fn entities(&self, root_type: ReferenceType) -> ClientResult<Vec<Record>> {
        let query = [("rootType", root_type.as_str().to_string())];
        let value = self
            .client
            .get_json("/resto/api/v2/entities/list", &query)
            .await?;
        json_records(value)
    }

    pub async fn measure_units(&self) -> ClientResult<Vec<Record>> {
        self.entities(ReferenceType::MeasureUnit).await
    }

    pub async fn tax_categories(&self) -> ClientResult<Vec<Record>> {
        self.entities(ReferenceType::TaxCategory).await
    }

    pub async fn accounting_categories(&self) -> ClientResult<Vec<Record>> {
        self.entities(ReferenceType::AccountingCategory).await
    }

    pub async fn product_categories(&self) -> ClientResult<Vec<Record>> {
        self.entities(ReferenceType::ProductCategory).await
    }
}
