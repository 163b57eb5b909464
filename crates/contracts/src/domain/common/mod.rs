//! Common types and traits for all resources

pub mod line_item;
pub mod resource;
pub mod resource_key;

// Re-exports
pub use line_item::{line_items_total, LineItem};
pub use resource::{Resource, ResourceKind};
pub use resource_key::ResourceKey;
