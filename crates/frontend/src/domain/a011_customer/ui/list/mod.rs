use contracts::domain::a011_customer::aggregate::Customer;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Customer {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |c: &Customer| c.name.clone()),
            ColumnDef::text("phone", "Phone", |c: &Customer| c.phone.clone()),
            ColumnDef::text("email", "Email", |c: &Customer| c.email.clone().unwrap_or_else(|| "-".into())),
            ColumnDef::text("address", "Address", |c: &Customer| c.address.clone().unwrap_or_else(|| "-".into())),
        ]
    }

    fn filter_column() -> &'static str {
        "name"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::text("phone", "Phone").required(),
            FieldDef::email("email", "Email"),
            FieldDef::textarea("address", "Address"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    resource_page::<Customer>()
}
