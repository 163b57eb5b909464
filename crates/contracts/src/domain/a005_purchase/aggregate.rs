use serde::{Deserialize, Serialize};

use crate::domain::common::{line_items_total, LineItem, Resource, ResourceKind};

/// Goods received from a vendor into an inventory.
///
/// Identified by the material receipt number (`mr_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub mr_id: String,
    /// Vendor name
    pub vendor: String,
    /// Receiving inventory name
    pub inventory: String,
    /// Date of receipt (YYYY-MM-DD)
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Purchase {
    pub fn total(&self) -> f64 {
        line_items_total(&self.products)
    }
}

impl Resource for Purchase {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Purchase;

    fn key_value(&self) -> Option<String> {
        Some(self.mr_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_default_to_empty() {
        let purchase: Purchase = serde_json::from_str(
            r#"{"mr_id":"MR-001","vendor":"Acme Co","inventory":"Main"}"#,
        )
        .unwrap();
        assert!(purchase.products.is_empty());
        assert_eq!(purchase.total(), 0.0);
        assert_eq!(purchase.key(), "MR-001");
    }
}
