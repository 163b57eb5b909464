use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Category name
    pub category: String,
    /// Vendor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Unit of measure, e.g. "pcs", "kg"
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Product {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Product;

    fn key_value(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
