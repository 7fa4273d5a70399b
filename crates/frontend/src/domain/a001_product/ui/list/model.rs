//! Catalog API calls

use crate::shared::api_utils::{get_json, post_unit, ApiConfig, ApiError};
use crate::shared::table_view::{RowAction, RowSource};
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_user_product::request::AddUserProductRequest;
use contracts::shared::envelope::{ProductNamesResponse, RowsEnvelope};

pub struct AllProductsSource {
    config: ApiConfig,
}

impl AllProductsSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RowSource<Product> for AllProductsSource {
    async fn fetch_rows(&self) -> Result<Vec<Product>, ApiError> {
        let envelope: RowsEnvelope<Product> =
            get_json(&self.config, "/products/getAllProducts", "Failed to load products").await?;
        Ok(envelope.into_rows())
    }
}

/// Copies a catalog product into the user's own list
pub struct AddToMyProducts {
    config: ApiConfig,
}

impl AddToMyProducts {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RowAction<Product> for AddToMyProducts {
    async fn apply(&self, row: &Product) -> Result<(), ApiError> {
        post_unit(
            &self.config,
            "/userProducts/addUserProduct",
            &AddUserProductRequest::from_catalog(row),
            "Failed to add product",
        )
        .await
    }
}

/// Catalog product names, for autocomplete
pub async fn fetch_product_names(config: &ApiConfig) -> Result<Vec<String>, ApiError> {
    let response: ProductNamesResponse =
        get_json(config, "/products/productsNames", "Failed to load product names").await?;
    Ok(response.product_names)
}
