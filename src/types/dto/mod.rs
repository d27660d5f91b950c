// API request/response models - poem-openapi objects
pub mod common;
pub mod info;
pub mod items;
pub mod text;
