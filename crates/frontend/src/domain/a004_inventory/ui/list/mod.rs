use contracts::domain::a004_inventory::aggregate::Inventory;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Inventory {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |i: &Inventory| i.name.clone()),
            ColumnDef::text("location", "Location", |i: &Inventory| i.location.clone()),
            ColumnDef::numeric("capacity", "Capacity", |i: &Inventory| {
                i.capacity.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
            }),
            ColumnDef::text("manager", "Manager", |i: &Inventory| i.manager.clone().unwrap_or_else(|| "-".into())),
        ]
    }

    fn filter_column() -> &'static str {
        "location"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::text("location", "Location").required(),
            FieldDef::integer("capacity", "Capacity"),
            FieldDef::text("manager", "Manager"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    resource_page::<Inventory>()
}
