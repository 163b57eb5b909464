use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Category {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Category;

    fn key_value(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
