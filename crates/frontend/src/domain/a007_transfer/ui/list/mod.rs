use contracts::domain::a007_transfer::aggregate::Transfer;
use leptos::prelude::*;

use crate::domain::a007_transfer::ui::details::transfer_fields;
use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::{format_amount, format_date};
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Transfer {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("trf_id", "Transfer no.", |t: &Transfer| t.trf_id.clone()),
            ColumnDef::text("from_inventory", "From", |t: &Transfer| t.from_inventory.clone()),
            ColumnDef::text("to_inventory", "To", |t: &Transfer| t.to_inventory.clone()),
            ColumnDef::text("transfer_date", "Date", |t: &Transfer| format_date(&t.transfer_date)),
            ColumnDef::text("status", "Status", |t: &Transfer| t.status.as_str().to_string()),
            ColumnDef::numeric("total", "Total", |t: &Transfer| format_amount(t.total())),
        ]
    }

    fn filter_column() -> &'static str {
        "trf_id"
    }

    fn form_fields() -> Vec<FieldDef> {
        transfer_fields()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TransferList() -> impl IntoView {
    resource_page::<Transfer>()
}
