use contracts::domain::a001_vendor::aggregate::Vendor;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl ResourceView for Vendor {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |v: &Vendor| v.name.clone()),
            ColumnDef::text("contact_person", "Contact person", |v: &Vendor| or_dash(&v.contact_person)),
            ColumnDef::text("email", "Email", |v: &Vendor| or_dash(&v.email)),
            ColumnDef::text("phone", "Phone", |v: &Vendor| v.phone.clone()),
            ColumnDef::text("gst_number", "GST number", |v: &Vendor| or_dash(&v.gst_number)),
        ]
    }

    fn filter_column() -> &'static str {
        "name"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::text("contact_person", "Contact person"),
            FieldDef::email("email", "Email"),
            FieldDef::text("phone", "Phone").required(),
            FieldDef::textarea("address", "Address"),
            FieldDef::text("gst_number", "GST number"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VendorList() -> impl IntoView {
    resource_page::<Vendor>()
}
