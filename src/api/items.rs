use std::sync::Arc;

use poem_openapi::{payload::Json, ApiResponse, OpenApi, Tags};
use crate::errors::ItemApiError;
use crate::stores::ItemStore;
use crate::types::dto::common::ErrorResponse;
use crate::types::dto::items::{CreateItemRequest, Item};

/// Items API
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

/// Response of the create endpoint
///
/// Payload parse and validator failures are turned into `ValidationFailed`
/// by `create_item_bad_request`, so a rejected write never reports 200.
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "create_item_bad_request")]
pub enum CreateItemResponse {
    /// The stored item
    #[oai(status = 200)]
    Ok(Json<Item>),

    /// Submitted item failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_item_bad_request(err: poem::Error) -> CreateItemResponse {
    tracing::debug!("Rejected item payload: {}", err);
    ItemApiError::validation_failed(err.to_string()).into()
}

impl From<ItemApiError> for CreateItemResponse {
    fn from(err: ItemApiError) -> Self {
        match err {
            ItemApiError::ValidationFailed(body) => CreateItemResponse::ValidationFailed(body),
            ItemApiError::InternalError(body) => CreateItemResponse::InternalError(body),
        }
    }
}

#[OpenApi]
impl ItemsApi {
    /// List items
    ///
    /// Returns every stored item in creation order
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemApiError> {
        let items = self.item_store.list_items().await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Create a new item
    ///
    /// Validates the submitted fields, stores the item and returns it with its
    /// generated ID and timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> CreateItemResponse {
        match self.item_store.create_item(body.0.into()).await {
            Ok(stored) => {
                tracing::info!(item_id = stored.id, "Item stored");
                CreateItemResponse::Ok(Json(stored.into()))
            }
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }
}
