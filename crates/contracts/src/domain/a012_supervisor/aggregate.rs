use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Resource, ResourceKind};
use crate::system::auth::Role;

/// Assignment of an employee to an inventory (inventory employment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Email of the assigned employee
    pub employee: String,
    /// Inventory name
    pub inventory: String,
    pub role: Role,
    /// Start of the assignment (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl Resource for Supervisor {
    type Key = Uuid;
    const KIND: ResourceKind = ResourceKind::Supervisor;

    fn key_value(&self) -> Option<Uuid> {
        self.id
    }
}
