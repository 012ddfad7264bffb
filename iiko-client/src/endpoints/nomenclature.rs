//! Nomenclature (products, dishes, modifiers, ...)

use super::{json_records, unwrap_envelope};
use crate::{ClientResult, IikoClient};
use iiko_shared::models::{Product, ProductType};
use iiko_shared::{Record, Value};

/// Filter for the nomenclature list; empty filters select everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Article numbers
    pub articles: Vec<String>,
    pub ids: Vec<String>,
    pub types: Vec<ProductType>,
    pub include_deleted: bool,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles<I, S>(mut self, articles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.articles.extend(articles.into_iter().map(Into::into));
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = ProductType>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    /// Query parameters, repeated keys for every filter value
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.include_deleted {
            query.push(("includeDeleted", "true".to_string()));
        }
        query.extend(self.articles.iter().map(|a| ("nums", a.clone())));
        query.extend(self.ids.iter().map(|id| ("ids", id.clone())));
        query.extend(self.types.iter().map(|t| ("types", t.as_str().to_string())));
        query
    }
}

/// Nomenclature endpoints
#[derive(Debug, Clone, Copy)]
pub struct NomenclatureEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> NomenclatureEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// Nomenclature items matching the filter
    pub async fn list(&self, query: &ProductQuery) -> ClientResult<Vec<Record>> {
        let value = self
            .client
            .get_json("/resto/api/v2/entities/products/list", &query.to_query())
            .await?;
        json_records(value)
    }

    /// Dishes only
    pub async fn dishes(&self) -> ClientResult<Vec<Record>> {
        self.list(&ProductQuery::new().types([ProductType::Dish])).await
    }

    /// Create a nomenclature item
    ///
    /// Returns the created item, or the whole answer when it carries none.
    pub async fn import_product(&self, product: &Product) -> ClientResult<Value> {
        let raw = self
            .client
            .post_json("/resto/api/v2/entities/products/save", product)
            .await?;
        unwrap_envelope(raw, "Failed to import product")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_selects_everything() {
        assert!(ProductQuery::new().to_query().is_empty());
    }

    #[test]
    fn test_query_repeats_filters_in_order() {
        let query = ProductQuery::new()
            .include_deleted(true)
            .articles(["00012", "00013"])
            .ids(["id-1"])
            .types([ProductType::Dish, ProductType::Modifier])
            .to_query();

        assert_eq!(
            query,
            vec![
                ("includeDeleted", "true".to_string()),
                ("nums", "00012".to_string()),
                ("nums", "00013".to_string()),
                ("ids", "id-1".to_string()),
                ("types", "DISH".to_string()),
                ("types", "MODIFIER".to_string()),
            ]
        );
    }
}
