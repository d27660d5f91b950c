use poem_openapi::Object;

use crate::types::db::item;
use crate::types::dto::text::StrictText;
use crate::types::internal::NewItem;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: StrictText,

    /// Optional description of the item (up to 1000 characters)
    #[oai(validator(max_length = 1000))]
    pub description: Option<StrictText>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            name: req.name.into_inner(),
            description: req.description.map(StrictText::into_inner),
        }
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Timestamp when the item was created (RFC 3339 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
        }
    }
}
