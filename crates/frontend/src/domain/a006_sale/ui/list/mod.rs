use contracts::domain::a006_sale::aggregate::Sale;
use leptos::prelude::*;

use crate::domain::a006_sale::ui::details::sale_fields;
use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::{format_amount, format_date};
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Sale {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("bill_id", "Bill no.", |s: &Sale| s.bill_id.clone()),
            ColumnDef::text("customer", "Customer", |s: &Sale| s.customer_name().to_string()),
            ColumnDef::text("inventory", "Inventory", |s: &Sale| s.inventory.clone()),
            ColumnDef::text("sale_date", "Date", |s: &Sale| format_date(&s.sale_date)),
            ColumnDef::text("payment_mode", "Payment", |s: &Sale| s.payment_mode.as_str().to_string()),
            ColumnDef::numeric("total", "Total", |s: &Sale| format_amount(s.total())),
        ]
    }

    fn filter_column() -> &'static str {
        "customer"
    }

    fn form_fields() -> Vec<FieldDef> {
        sale_fields()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    resource_page::<Sale>()
}
