use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceKind};

/// Supplier of goods, identified by its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Tax registration number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
}

impl Resource for Vendor {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Vendor;

    fn key_value(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_payload() {
        let vendor: Vendor = serde_json::from_str(r#"{"name":"Acme Co"}"#).unwrap();
        assert_eq!(vendor.key(), "Acme Co");
        assert!(vendor.email.is_none());
        assert_eq!(vendor.phone, "");
    }
}
