use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{LineItem, Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    Dispatched,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::Dispatched => "dispatched",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn options() -> &'static [&'static str] {
        &["pending", "dispatched", "delivered", "cancelled"]
    }
}

/// Delivery run of a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// VIN of the vehicle
    pub vehicle: String,
    /// Origin inventory name
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub dispatch_date: String,
    #[serde(default)]
    pub status: ShipmentStatus,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Resource for Shipment {
    type Key = Uuid;
    const KIND: ResourceKind = ResourceKind::Shipment;

    fn key_value(&self) -> Option<Uuid> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_shipment_has_empty_key() {
        let shipment: Shipment = serde_json::from_str(
            r#"{"vehicle":"1HGCM82633A004352","origin":"Main","destination":"Depot 4"}"#,
        )
        .unwrap();
        assert_eq!(shipment.key(), "");
        let json = serde_json::to_value(&shipment).unwrap();
        assert!(json.get("id").is_none());
    }
}
