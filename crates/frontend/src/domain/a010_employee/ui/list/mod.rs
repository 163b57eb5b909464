use contracts::domain::a010_employee::aggregate::Employee;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Employee {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |e: &Employee| e.name.clone()),
            ColumnDef::text("email", "Email", |e: &Employee| e.email.clone()),
            ColumnDef::text("phone", "Phone", |e: &Employee| e.phone.clone()),
            ColumnDef::text("designation", "Designation", |e: &Employee| e.designation.clone()),
            ColumnDef::text("role", "Role", |e: &Employee| e.role.to_string()),
        ]
    }

    fn filter_column() -> &'static str {
        "name"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::email("email", "Email").required(),
            FieldDef::text("phone", "Phone"),
            FieldDef::text("designation", "Designation"),
            FieldDef::select("role", "Role", Role::options()),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    resource_page::<Employee>()
}
