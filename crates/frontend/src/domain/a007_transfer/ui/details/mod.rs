use contracts::domain::a007_transfer::aggregate::TransferStatus;

use crate::shared::forms::FieldDef;

pub fn transfer_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("trf_id", "Transfer no.").required(),
        FieldDef::text("from_inventory", "From").required(),
        FieldDef::text("to_inventory", "To").required(),
        FieldDef::date("transfer_date", "Date").required(),
        FieldDef::select("status", "Status", TransferStatus::options()),
        FieldDef::line_items("products", "Products").required(),
    ]
}
