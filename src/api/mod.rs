// API layer - HTTP endpoints
pub mod health;
pub mod info;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use info::InfoApi;
pub use items::ItemsApi;
use poem::Route;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the API service and Swagger UI
///
/// Endpoints are nested under `/api`, the UI under `/swagger`.
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let items_api = ItemsApi::new(app_data.item_store.clone());

    let api_service = OpenApiService::new(
        (HealthApi, InfoApi, items_api),
        "Contact Items API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
}
