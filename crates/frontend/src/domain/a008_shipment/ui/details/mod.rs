use contracts::domain::a008_shipment::aggregate::ShipmentStatus;

use crate::shared::forms::FieldDef;

/// Shipment form; the id is assigned by the server and never edited
pub fn shipment_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("vehicle", "Vehicle (VIN)").required(),
        FieldDef::text("origin", "Origin").required(),
        FieldDef::text("destination", "Destination").required(),
        FieldDef::date("dispatch_date", "Dispatch date"),
        FieldDef::select("status", "Status", ShipmentStatus::options()),
        FieldDef::line_items("products", "Products"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FormValues;
    use contracts::domain::a008_shipment::aggregate::Shipment;
    use serde_json::json;

    #[test]
    fn new_shipment_has_no_id() {
        let fields = shipment_fields();
        let mut values = FormValues::empty(&fields);
        values.set_text("vehicle", "1HGCM82633A004352".into());
        values.set_text("origin", "Main".into());
        values.set_text("destination", "North depot".into());

        let shipment: Shipment = values.parse(&fields, json!({})).unwrap();
        assert_eq!(shipment.id, None);
        assert!(shipment.products.is_empty());
        assert_eq!(shipment.dispatch_date, "");
    }
}
