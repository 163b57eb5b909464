use serde::{Deserialize, Serialize};

use crate::domain::common::{line_items_total, LineItem, Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    #[default]
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::InTransit => "in_transit",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }

    pub fn options() -> &'static [&'static str] {
        &["pending", "in_transit", "completed", "cancelled"]
    }
}

/// Stock movement between two inventories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub trf_id: String,
    pub from_inventory: String,
    pub to_inventory: String,
    #[serde(default)]
    pub transfer_date: String,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Transfer {
    pub fn total(&self) -> f64 {
        line_items_total(&self.products)
    }
}

impl Resource for Transfer {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Transfer;

    fn key_value(&self) -> Option<String> {
        Some(self.trf_id.clone())
    }
}
