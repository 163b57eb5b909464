use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Resource, ResourceKind};
use crate::system::auth::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub designation: String,
    /// Dashboard role granted to the employee's account
    pub role: Role,
}

impl Resource for Employee {
    type Key = Uuid;
    const KIND: ResourceKind = ResourceKind::Employee;

    fn key_value(&self) -> Option<Uuid> {
        self.id
    }
}
