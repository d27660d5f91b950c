use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::NewItem;

/// Print every stored item, one per line
pub async fn list_items(item_store: &ItemStore) -> Result<(), Box<dyn std::error::Error>> {
    let items = item_store.list_items().await?;

    if items.is_empty() {
        println!("No items stored");
        return Ok(());
    }

    for stored in &items {
        println!("{}", format_item_line(stored));
    }

    Ok(())
}

/// Validate and store one item from the command line
pub async fn add_item(
    item_store: &ItemStore,
    name: &str,
    description: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stored = item_store.create_item(NewItem::new(name, description)).await?;

    tracing::info!(item_id = stored.id, "Item created from CLI");
    println!("Created item {}", format_item_line(&stored));

    Ok(())
}

fn format_item_line(stored: &item::Model) -> String {
    format!(
        "#{} {} - {} ({})",
        stored.id,
        stored.name,
        stored.description.as_deref().unwrap_or("no description"),
        stored.created_at,
    )
}
