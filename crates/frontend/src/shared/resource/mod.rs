//! Generic REST-backed resource: one implementation for every entity page.
//!
//! - store.rs: local list mutators (no I/O)
//! - envelope.rs: response body decoding
//! - client.rs: CRUD calls with toast reporting
//! - hook.rs: reactive list state + client, used by pages
//! - page.rs: role-gated list page composition

pub mod client;
pub mod envelope;
pub mod hook;
pub mod page;
pub mod store;

pub use client::ResourceClient;
pub use hook::{use_resource, ResourceHook};
pub use page::{resource_page, ResourceView};
