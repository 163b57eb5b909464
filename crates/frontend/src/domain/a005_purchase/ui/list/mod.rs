use contracts::domain::a005_purchase::aggregate::Purchase;
use leptos::prelude::*;

use crate::domain::a005_purchase::ui::details::purchase_fields;
use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::{format_amount, format_date};
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Purchase {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("mr_id", "MR no.", |p: &Purchase| p.mr_id.clone()),
            ColumnDef::text("vendor", "Vendor", |p: &Purchase| p.vendor.clone()),
            ColumnDef::text("inventory", "Inventory", |p: &Purchase| p.inventory.clone()),
            ColumnDef::text("purchase_date", "Date", |p: &Purchase| format_date(&p.purchase_date)),
            ColumnDef::numeric("lines", "Lines", |p: &Purchase| p.products.len().to_string()),
            ColumnDef::numeric("total", "Total", |p: &Purchase| format_amount(p.total())),
        ]
    }

    fn filter_column() -> &'static str {
        "vendor"
    }

    fn form_fields() -> Vec<FieldDef> {
        purchase_fields()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PurchaseList() -> impl IntoView {
    resource_page::<Purchase>()
}
