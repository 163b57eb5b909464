use serde::{Deserialize, Serialize};

/// Product line carried by purchases, sales, transfers and shipments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LineItem {
    /// Product name (natural key of the product)
    pub product: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Sum of all line amounts
pub fn line_items_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::amount).sum()
}
