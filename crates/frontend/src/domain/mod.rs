pub mod a001_department;
pub mod a002_employee;
pub mod a003_category;
pub mod a004_unit;
pub mod a005_supplier;
pub mod a006_item;
pub mod a007_item_asset;
pub mod a008_asset_assignment;
pub mod a009_inventory_stock;
pub mod a010_stock_receival;
pub mod a011_stock_issuance;
