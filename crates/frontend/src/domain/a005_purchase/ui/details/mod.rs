//! Purchase (material receipt) form

use crate::shared::forms::FieldDef;

pub fn purchase_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("mr_id", "MR no.").required(),
        FieldDef::text("vendor", "Vendor").required(),
        FieldDef::text("inventory", "Inventory").required(),
        FieldDef::date("purchase_date", "Date").required(),
        FieldDef::line_items("products", "Products").required(),
    ]
}
