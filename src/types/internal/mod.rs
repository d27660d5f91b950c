// Internal domain types shared by stores and the CLI
pub mod item;

pub use item::NewItem;
