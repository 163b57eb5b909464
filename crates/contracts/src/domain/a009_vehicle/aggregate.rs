use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    OnTrip,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::OnTrip => "on_trip",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn options() -> &'static [&'static str] {
        &["available", "on_trip", "maintenance"]
    }
}

/// Fleet vehicle, identified by its VIN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: String,
    pub registration_number: String,
    #[serde(default)]
    pub model: String,
    /// Payload capacity in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_kg: Option<f64>,
    /// Name of the assigned captain (driver)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<String>,
    #[serde(default)]
    pub status: VehicleStatus,
}

impl Resource for Vehicle {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Vehicle;

    fn key_value(&self) -> Option<String> {
        Some(self.vin.clone())
    }
}
