use contracts::domain::a008_shipment::aggregate::Shipment;
use contracts::domain::common::line_items_total;
use leptos::prelude::*;

use crate::domain::a008_shipment::ui::details::shipment_fields;
use crate::shared::data_table::ColumnDef;
use crate::shared::date_utils::{format_amount, format_date};
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Shipment {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("vehicle", "Vehicle", |s: &Shipment| s.vehicle.clone()),
            ColumnDef::text("origin", "Origin", |s: &Shipment| s.origin.clone()),
            ColumnDef::text("destination", "Destination", |s: &Shipment| s.destination.clone()),
            ColumnDef::text("dispatch_date", "Dispatched", |s: &Shipment| format_date(&s.dispatch_date)),
            ColumnDef::text("status", "Status", |s: &Shipment| s.status.as_str().to_string()),
            ColumnDef::numeric("value", "Value", |s: &Shipment| format_amount(line_items_total(&s.products))),
        ]
    }

    fn filter_column() -> &'static str {
        "destination"
    }

    fn form_fields() -> Vec<FieldDef> {
        shipment_fields()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ShipmentList() -> impl IntoView {
    resource_page::<Shipment>()
}
