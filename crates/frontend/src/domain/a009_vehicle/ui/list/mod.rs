use contracts::domain::a009_vehicle::aggregate::{Vehicle, VehicleStatus};
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Vehicle {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("vin", "VIN", |v: &Vehicle| v.vin.clone()),
            ColumnDef::text("registration_number", "Registration", |v: &Vehicle| v.registration_number.clone()),
            ColumnDef::text("model", "Model", |v: &Vehicle| v.model.clone()),
            ColumnDef::numeric("capacity_kg", "Capacity, kg", |v: &Vehicle| {
                v.capacity_kg.map(|c| format!("{}", c)).unwrap_or_else(|| "-".into())
            }),
            ColumnDef::text("captain", "Captain", |v: &Vehicle| v.captain.clone().unwrap_or_else(|| "-".into())),
            ColumnDef::text("status", "Status", |v: &Vehicle| v.status.as_str().to_string()),
        ]
    }

    fn filter_column() -> &'static str {
        "registration_number"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("vin", "VIN").required(),
            FieldDef::text("registration_number", "Registration").required(),
            FieldDef::text("model", "Model"),
            FieldDef::decimal("capacity_kg", "Capacity, kg"),
            FieldDef::text("captain", "Captain"),
            FieldDef::select("status", "Status", VehicleStatus::options()),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VehicleList() -> impl IntoView {
    resource_page::<Vehicle>()
}
