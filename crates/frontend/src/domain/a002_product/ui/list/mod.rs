use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::format_amount;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Product {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |p: &Product| p.name.clone()),
            ColumnDef::text("category", "Category", |p: &Product| p.category.clone()),
            ColumnDef::text("vendor", "Vendor", |p: &Product| p.vendor.clone().unwrap_or_else(|| "-".into())),
            ColumnDef::text("unit", "Unit", |p: &Product| p.unit.clone()),
            ColumnDef::numeric("price", "Price", |p: &Product| format_amount(p.price)),
        ]
    }

    fn filter_column() -> &'static str {
        "name"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::text("category", "Category").required(),
            FieldDef::text("vendor", "Vendor"),
            FieldDef::text("unit", "Unit"),
            FieldDef::decimal("price", "Price").required(),
            FieldDef::textarea("description", "Description"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    resource_page::<Product>()
}
