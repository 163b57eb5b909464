pub mod a001_vendor;
pub mod a002_product;
pub mod a003_category;
pub mod a004_inventory;
pub mod a005_purchase;
pub mod a006_sale;
pub mod a007_transfer;
pub mod a008_shipment;
pub mod a009_vehicle;
pub mod a010_employee;
pub mod a011_customer;
pub mod a012_supervisor;
