use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Resource for Customer {
    type Key = Uuid;
    const KIND: ResourceKind = ResourceKind::Customer;

    fn key_value(&self) -> Option<Uuid> {
        self.id
    }
}
