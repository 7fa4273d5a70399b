//! User product API calls

use crate::shared::api_utils::{delete_unit, get_json, post_unit, put_unit, ApiConfig, ApiError};
use crate::shared::table_view::{RowAction, RowSource};
use async_trait::async_trait;
use contracts::domain::a002_user_product::aggregate::UserProduct;
use contracts::domain::a002_user_product::request::{
    AddUserProductByNutritionValueUrlRequest, AddUserProductByRimiUrlRequest,
    AddUserProductRequest, DeleteUserProductRequest, UpdateUserProductRequest,
};
use contracts::shared::envelope::{ProductNamesResponse, RowsEnvelope};

pub struct UserProductsSource {
    config: ApiConfig,
}

impl UserProductsSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RowSource<UserProduct> for UserProductsSource {
    async fn fetch_rows(&self) -> Result<Vec<UserProduct>, ApiError> {
        let envelope: RowsEnvelope<UserProduct> = get_json(
            &self.config,
            "/userProducts/getUserProducts",
            "Failed to load your products",
        )
        .await?;
        Ok(envelope.into_rows())
    }
}

/// Deletes by product name, the key the backend uses for user products
pub struct DeleteUserProduct {
    config: ApiConfig,
}

impl DeleteUserProduct {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RowAction<UserProduct> for DeleteUserProduct {
    async fn apply(&self, row: &UserProduct) -> Result<(), ApiError> {
        let body = DeleteUserProductRequest {
            product_name: row.product_name.clone().unwrap_or_default(),
        };
        delete_unit(&self.config, "/userProducts/deleteUserProduct", &body, "Failed to delete product").await
    }
}

pub async fn add_product(config: &ApiConfig, request: &AddUserProductRequest) -> Result<(), ApiError> {
    post_unit(config, "/userProducts/addUserProduct", request, "Failed to add product").await
}

pub async fn add_product_by_rimi_url(
    config: &ApiConfig,
    request: &AddUserProductByRimiUrlRequest,
) -> Result<(), ApiError> {
    post_unit(config, "/userProducts/addUserProductUrlRimi", request, "Failed to add product from Rimi").await
}

pub async fn add_product_by_nutrition_value_url(
    config: &ApiConfig,
    request: &AddUserProductByNutritionValueUrlRequest,
) -> Result<(), ApiError> {
    post_unit(
        config,
        "/userProducts/addUserProductUrlNutritionValue",
        request,
        "Failed to add product from NutritionValue",
    )
    .await
}

/// Names of the user's own products, for autocomplete
pub async fn update_user_product(
    config: &ApiConfig,
    request: &UpdateUserProductRequest,
) -> Result<(), ApiError> {
    put_unit(config, "/userProducts/updateUserProduct", request, "Failed to update product").await
}

pub async fn fetch_user_product_names(config: &ApiConfig) -> Result<Vec<String>, ApiError> {
    let response: ProductNamesResponse = get_json(
        config,
        "/userProducts/userProductsNames",
        "Failed to load product names",
    )
    .await?;
    Ok(response.product_names)
}
