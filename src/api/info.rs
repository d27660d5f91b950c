use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::info::ContactInfo;

/// Static contact information API
pub struct InfoApi;

#[derive(Tags)]
enum ApiTags {
    /// Contact information
    Info,
}

#[OpenApi]
impl InfoApi {
    /// Get contact information
    ///
    /// Always returns the same fixed record; nothing from the request is read
    #[oai(path = "/info", method = "get", tag = "ApiTags::Info")]
    async fn get_info(&self) -> Json<ContactInfo> {
        Json(ContactInfo::fixed())
    }
}
