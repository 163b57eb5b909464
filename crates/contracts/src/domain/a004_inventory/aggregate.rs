use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceKind};

/// Warehouse or store holding stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub name: String,
    pub location: String,
    /// Storage capacity in units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Name of the responsible employee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

impl Resource for Inventory {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Inventory;

    fn key_value(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
