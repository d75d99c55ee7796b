pub mod a001_user;
pub mod a002_machine;
pub mod a003_mold;
pub mod a004_product;
pub mod a005_raw_material;
pub mod a006_supplier;
pub mod a007_customer;
pub mod a008_container;
pub mod a009_production_order;
pub mod a010_work_order;
pub mod a011_daily_schedule;
pub mod a012_machine_downtime;
pub mod a013_maintenance_schedule;
pub mod a014_material_batch;
pub mod a015_finished_good;
pub mod a016_sales_order;
pub mod a017_purchase_order;
pub mod a018_quality_inspection;
pub mod a019_customer_complaint;
pub mod a020_production_cost;
