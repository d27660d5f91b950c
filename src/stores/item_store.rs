use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::internal::NewItem;

/// Repository for item storage operations
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch every stored item in insertion order (ascending id)
    ///
    /// # Errors
    ///
    /// Returns `InternalError::Database` if the query fails
    pub async fn list_items(&self) -> Result<Vec<item::Model>, InternalError> {
        item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Validate and insert a single item
    ///
    /// The creation timestamp is assigned here; the returned model is the
    /// row as stored, including its generated id.
    ///
    /// # Errors
    ///
    /// Returns `InternalError::Item` if validation fails (nothing is written),
    /// or `InternalError::Database` if the insert fails
    pub async fn create_item(&self, new_item: NewItem) -> Result<item::Model, InternalError> {
        new_item.validate()?;

        let active = item::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(new_item.name),
            description: Set(new_item.description),
            created_at: Set(Utc::now().to_rfc3339()),
        };

        let stored = active
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::debug!(item_id = stored.id, "Item created");

        Ok(stored)
    }

    /// Number of stored items
    pub async fn count_items(&self) -> Result<u64, InternalError> {
        item::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::InternalError;
    use crate::errors::internal::ItemError;
    use crate::test::utils::setup_test_store;
    use crate::types::internal::NewItem;

    #[tokio::test]
    async fn test_list_items_empty_by_default() {
        let (_db, store) = setup_test_store().await;

        let items = store.list_items().await.unwrap();
        assert!(items.is_empty());
        assert_eq!(store.count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_item_returns_stored_row() {
        let (_db, store) = setup_test_store().await;

        let stored = store
            .create_item(NewItem::new("widget", Some("a small widget".to_string())))
            .await
            .unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.name, "widget");
        assert_eq!(stored.description.as_deref(), Some("a small widget"));
        assert!(chrono::DateTime::parse_from_rfc3339(&stored.created_at).is_ok());
    }

    #[tokio::test]
    async fn test_list_items_in_insertion_order() {
        let (_db, store) = setup_test_store().await;

        for name in ["first", "second", "third"] {
            store.create_item(NewItem::new(name, None)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(store.count_items().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_invalid_item_is_not_persisted() {
        let (_db, store) = setup_test_store().await;

        let result = store.create_item(NewItem::new("", None)).await;
        assert!(matches!(result, Err(InternalError::Item(ItemError::Validation { .. }))));

        assert_eq!(store.count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (_db, store) = setup_test_store().await;

        let a = store.create_item(NewItem::new("same", None)).await.unwrap();
        let b = store.create_item(NewItem::new("same", None)).await.unwrap();

        assert_ne!(a.id, b.id);
    }
}
