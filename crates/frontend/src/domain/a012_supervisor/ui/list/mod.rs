use contracts::domain::a012_supervisor::aggregate::Supervisor;
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::format_date;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

// Read-only for every role but admin
impl ResourceView for Supervisor {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("employee", "Employee", |s: &Supervisor| s.employee.clone()),
            ColumnDef::text("inventory", "Inventory", |s: &Supervisor| s.inventory.clone()),
            ColumnDef::text("role", "Role", |s: &Supervisor| s.role.to_string()),
            ColumnDef::text("since", "Since", |s: &Supervisor| format_date(s.since.as_deref().unwrap_or_default())),
        ]
    }

    fn filter_column() -> &'static str {
        "inventory"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::email("employee", "Employee email").required(),
            FieldDef::text("inventory", "Inventory").required(),
            FieldDef::select("role", "Role", Role::options()),
            FieldDef::date("since", "Since"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupervisorList() -> impl IntoView {
    resource_page::<Supervisor>()
}
