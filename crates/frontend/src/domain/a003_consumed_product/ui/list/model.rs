//! Consumed-products API calls

use crate::shared::api_utils::{delete_unit, get_json, post_json, post_unit, ApiConfig, ApiError};
use crate::shared::table_view::{RowAction, RowSource};
use async_trait::async_trait;
use contracts::domain::a003_consumed_product::aggregate::ConsumedProduct;
use contracts::domain::a003_consumed_product::request::{
    ConsumedRange, DeleteConsumedProductRequest, SaveConsumedProductRequest,
};
use contracts::shared::envelope::RowsEnvelope;

const LOAD_FAILED: &str = "Failed to load consumed products";

/// Log entries for one period
pub struct ConsumedProductsSource {
    config: ApiConfig,
    range: ConsumedRange,
}

impl ConsumedProductsSource {
    pub fn new(config: ApiConfig, range: ConsumedRange) -> Self {
        Self { config, range }
    }
}

#[async_trait(?Send)]
impl RowSource<ConsumedProduct> for ConsumedProductsSource {
    async fn fetch_rows(&self) -> Result<Vec<ConsumedProduct>, ApiError> {
        let envelope: RowsEnvelope<ConsumedProduct> = match self.range.by_date_request() {
            Some(body) => post_json(&self.config, self.range.path(), &body, LOAD_FAILED).await?,
            None => get_json(&self.config, self.range.path(), LOAD_FAILED).await?,
        };
        Ok(envelope.into_rows())
    }
}

pub struct DeleteConsumedProduct {
    config: ApiConfig,
}

impl DeleteConsumedProduct {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RowAction<ConsumedProduct> for DeleteConsumedProduct {
    async fn apply(&self, row: &ConsumedProduct) -> Result<(), ApiError> {
        let body = DeleteConsumedProductRequest { product_id: row.id };
        delete_unit(&self.config, "/consumedProducts/deleteProduct", &body, "Failed to delete entry").await
    }
}

pub async fn save_consumed_product(
    config: &ApiConfig,
    request: &SaveConsumedProductRequest,
) -> Result<(), ApiError> {
    post_unit(config, "/consumedProducts/saveConsumedProduct", request, "Failed to save consumed product").await
}
