use serde::{de::DeserializeOwned, Serialize};

use super::ResourceKey;

/// Every backend collection managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Vendor,
    Product,
    Category,
    Inventory,
    Purchase,
    Sale,
    Transfer,
    Shipment,
    Vehicle,
    Employee,
    Customer,
    Supervisor,
}

impl ResourceKind {
    /// All kinds in menu order
    pub fn all() -> &'static [ResourceKind] {
        use ResourceKind::*;
        &[
            Vendor, Product, Category, Inventory, Purchase, Sale, Transfer, Shipment, Vehicle,
            Employee, Customer, Supervisor,
        ]
    }

    /// Collection name, used as REST path segment, config key and page key
    pub fn collection_name(&self) -> &'static str {
        match self {
            ResourceKind::Vendor => "vendors",
            ResourceKind::Product => "products",
            ResourceKind::Category => "categories",
            ResourceKind::Inventory => "inventories",
            ResourceKind::Purchase => "purchases",
            ResourceKind::Sale => "sales",
            ResourceKind::Transfer => "transfers",
            ResourceKind::Shipment => "shipments",
            ResourceKind::Vehicle => "vehicles",
            ResourceKind::Employee => "employees",
            ResourceKind::Customer => "customers",
            ResourceKind::Supervisor => "supervisors",
        }
    }

    /// JSON key wrapping a single entity in server responses, e.g. `{"vendor": {...}}`
    pub fn envelope(&self) -> &'static str {
        match self {
            ResourceKind::Vendor => "vendor",
            ResourceKind::Product => "product",
            ResourceKind::Category => "category",
            ResourceKind::Inventory => "inventory",
            ResourceKind::Purchase => "purchase",
            ResourceKind::Sale => "sale",
            ResourceKind::Transfer => "transfer",
            ResourceKind::Shipment => "shipment",
            ResourceKind::Vehicle => "vehicle",
            ResourceKind::Employee => "employee",
            ResourceKind::Customer => "customer",
            ResourceKind::Supervisor => "supervisor",
        }
    }

    /// Field holding the identity key
    pub fn key_field(&self) -> &'static str {
        match self {
            ResourceKind::Vendor
            | ResourceKind::Product
            | ResourceKind::Category
            | ResourceKind::Inventory => "name",
            ResourceKind::Purchase => "mr_id",
            ResourceKind::Sale => "bill_id",
            ResourceKind::Transfer => "trf_id",
            ResourceKind::Vehicle => "vin",
            ResourceKind::Shipment
            | ResourceKind::Employee
            | ResourceKind::Customer
            | ResourceKind::Supervisor => "id",
        }
    }

    /// UI name of a single element
    pub fn element_name(&self) -> &'static str {
        match self {
            ResourceKind::Vendor => "Vendor",
            ResourceKind::Product => "Product",
            ResourceKind::Category => "Category",
            ResourceKind::Inventory => "Inventory",
            ResourceKind::Purchase => "Purchase",
            ResourceKind::Sale => "Sale",
            ResourceKind::Transfer => "Transfer",
            ResourceKind::Shipment => "Shipment",
            ResourceKind::Vehicle => "Vehicle",
            ResourceKind::Employee => "Employee",
            ResourceKind::Customer => "Customer",
            ResourceKind::Supervisor => "Supervisor",
        }
    }

    /// UI name of the list
    pub fn list_name(&self) -> &'static str {
        match self {
            ResourceKind::Vendor => "Vendors",
            ResourceKind::Product => "Products",
            ResourceKind::Category => "Categories",
            ResourceKind::Inventory => "Inventories",
            ResourceKind::Purchase => "Purchases",
            ResourceKind::Sale => "Sales",
            ResourceKind::Transfer => "Transfers",
            ResourceKind::Shipment => "Shipments",
            ResourceKind::Vehicle => "Vehicles",
            ResourceKind::Employee => "Employees",
            ResourceKind::Customer => "Customers",
            ResourceKind::Supervisor => "Supervisors",
        }
    }

    pub fn from_collection_name(name: &str) -> Option<ResourceKind> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.collection_name() == name)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}

/// A record mirrored from one backend REST collection
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static
{
    /// Type of the identity key
    type Key: ResourceKey;

    /// Collection this record belongs to
    const KIND: ResourceKind;

    /// Identity key, `None` while a server-assigned id is not known yet
    fn key_value(&self) -> Option<Self::Key>;

    /// Identity key as used in paths and list lookups
    fn key(&self) -> String {
        self.key_value().map(|k| k.as_key()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names_round_trip() {
        for kind in ResourceKind::all() {
            assert_eq!(
                ResourceKind::from_collection_name(kind.collection_name()),
                Some(*kind)
            );
        }
        assert_eq!(ResourceKind::from_collection_name("invoices"), None);
    }

    #[test]
    fn natural_and_uuid_keys() {
        assert_eq!(ResourceKind::Purchase.key_field(), "mr_id");
        assert_eq!(ResourceKind::Sale.key_field(), "bill_id");
        assert_eq!(ResourceKind::Transfer.key_field(), "trf_id");
        assert_eq!(ResourceKind::Vehicle.key_field(), "vin");
        assert_eq!(ResourceKind::Vendor.key_field(), "name");
        assert_eq!(ResourceKind::Customer.key_field(), "id");
    }
}
