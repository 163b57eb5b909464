//! Sale (bill) form. The buyer is embedded, so its fields are dotted.

use contracts::domain::a006_sale::aggregate::PaymentMode;

use crate::shared::forms::FieldDef;

pub fn sale_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("bill_id", "Bill no.").required(),
        FieldDef::text("customer.name", "Customer"),
        FieldDef::text("customer.phone", "Customer phone"),
        FieldDef::text("inventory", "Inventory").required(),
        FieldDef::date("sale_date", "Date").required(),
        FieldDef::select("payment_mode", "Payment", PaymentMode::options()),
        FieldDef::line_items("products", "Products").required(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FormValues;
    use contracts::domain::a006_sale::aggregate::Sale;
    use serde_json::json;

    #[test]
    fn edit_keeps_customer_id() {
        let fields = sale_fields();
        let existing = json!({
            "bill_id": "B-9",
            "customer": {"id": "5f0c6a52-8f0e-4a52-9a43-2f5d2b8e3c11", "name": "Jane Doe", "phone": "555"},
            "inventory": "Main",
            "sale_date": "2024-03-15T10:00:00Z",
            "payment_mode": "card",
            "products": [{"product": "Bolt", "quantity": 2, "unit_price": 3.0}]
        });
        let mut values = FormValues::from_json(&fields, &existing);
        assert_eq!(values.text("sale_date"), "2024-03-15");
        assert_eq!(values.text("payment_mode"), "card");

        values.set_text("customer.phone", "556".into());
        let sale: Sale = values.parse(&fields, existing).unwrap();
        let customer = sale.customer.as_ref().unwrap();
        assert!(customer.id.is_some());
        assert_eq!(customer.phone, "556");
        assert_eq!(sale.total(), 6.0);
    }
}
