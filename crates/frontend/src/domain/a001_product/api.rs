//! Products resource: `GET/POST products`, `POST/DELETE products/{id}`

use crate::shared::api_utils::{ApiClient, ApiError};
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{parse_product_list, Product, ProductId};
use contracts::domain::a001_product::payload::ProductPayload;

const RESOURCE: &str = "products";

/// Operations the product list needs from the backend.
#[async_trait(?Send)]
pub trait ProductsApi: Send + Sync {
    /// Full collection in server order
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    async fn create(&self, payload: ProductPayload) -> Result<(), ApiError>;

    /// Submitted as POST with `_method=PUT`: the backend only parses multipart bodies on POST
    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<(), ApiError>;

    async fn delete(&self, id: ProductId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    client: ApiClient,
}

impl HttpProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn collection_path() -> String {
        RESOURCE.to_string()
    }

    pub fn item_path(id: ProductId) -> String {
        format!("{}/{}", RESOURCE, id)
    }
}

#[async_trait(?Send)]
impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let body = self.client.get_text(&Self::collection_path()).await?;
        parse_product_list(&body).map_err(ApiError::Decode)
    }

    async fn create(&self, payload: ProductPayload) -> Result<(), ApiError> {
        self.client
            .post_multipart(&Self::collection_path(), payload.into_parts())
            .await
    }

    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<(), ApiError> {
        self.client
            .post_multipart(&Self::item_path(id), payload.into_update_parts())
            .await
    }

    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.client.delete(&Self::item_path(id)).await
    }
}
