//! Page key -> page component

use leptos::prelude::*;

use crate::domain::a001_vendor::ui::list::VendorList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_inventory::ui::list::InventoryList;
use crate::domain::a005_purchase::ui::list::PurchaseList;
use crate::domain::a006_sale::ui::list::SaleList;
use crate::domain::a007_transfer::ui::list::TransferList;
use crate::domain::a008_shipment::ui::list::ShipmentList;
use crate::domain::a009_vehicle::ui::list::VehicleList;
use crate::domain::a010_employee::ui::list::EmployeeList;
use crate::domain::a011_customer::ui::list::CustomerList;
use crate::domain::a012_supervisor::ui::list::SupervisorList;

/// Render the page registered under a collection name
pub fn render_page(key: &str) -> AnyView {
    match key {
        "vendors" => view! { <VendorList /> }.into_any(),
        "products" => view! { <ProductList /> }.into_any(),
        "categories" => view! { <CategoryList /> }.into_any(),
        "inventories" => view! { <InventoryList /> }.into_any(),
        "purchases" => view! { <PurchaseList /> }.into_any(),
        "sales" => view! { <SaleList /> }.into_any(),
        "transfers" => view! { <TransferList /> }.into_any(),
        "shipments" => view! { <ShipmentList /> }.into_any(),
        "vehicles" => view! { <VehicleList /> }.into_any(),
        "employees" => view! { <EmployeeList /> }.into_any(),
        "customers" => view! { <CustomerList /> }.into_any(),
        "supervisors" => view! { <SupervisorList /> }.into_any(),
        other => {
            log::warn!("no page registered for '{}'", other);
            let message = format!("Page not found: {}", other);
            view! {
                <div class="page page--not-found">
                    <p>{message}</p>
                </div>
            }
            .into_any()
        }
    }
}
