use serde::{Deserialize, Serialize};

use crate::domain::a011_customer::aggregate::Customer;
use crate::domain::common::{line_items_total, LineItem, Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    #[default]
    Cash,
    Card,
    Upi,
    Credit,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Card => "card",
            PaymentMode::Upi => "upi",
            PaymentMode::Credit => "credit",
        }
    }

    pub fn options() -> &'static [&'static str] {
        &["cash", "card", "upi", "credit"]
    }
}

/// Sale of goods from an inventory, identified by the bill number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub bill_id: String,
    /// Buyer, embedded as returned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Issuing inventory name
    pub inventory: String,
    #[serde(default)]
    pub sale_date: String,
    #[serde(default)]
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Sale {
    pub fn total(&self) -> f64 {
        line_items_total(&self.products)
    }

    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }
}

impl Resource for Sale {
    type Key = String;
    const KIND: ResourceKind = ResourceKind::Sale;

    fn key_value(&self) -> Option<String> {
        Some(self.bill_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_customer() {
        let sale: Sale = serde_json::from_str(
            r#"{
                "bill_id": "B-17",
                "customer": {"name": "Jane Doe", "phone": "555-0101"},
                "inventory": "Main",
                "payment_mode": "upi",
                "products": [{"product": "Bolt", "quantity": 2, "unit_price": 3.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(sale.customer_name(), "Jane Doe");
        assert_eq!(sale.payment_mode, PaymentMode::Upi);
        assert_eq!(sale.total(), 6.0);
    }

    #[test]
    fn customer_is_optional() {
        let sale: Sale =
            serde_json::from_str(r#"{"bill_id":"B-18","inventory":"Main"}"#).unwrap();
        assert_eq!(sale.customer_name(), "-");
        assert_eq!(sale.payment_mode, PaymentMode::Cash);
    }
}
