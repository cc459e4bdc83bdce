pub mod billing_service;
pub mod context;
pub mod food_service;
pub mod invoice_service;
pub mod menu_service;
pub mod order_item_service;
pub mod order_service;
pub mod pricing;
pub mod table_service;
pub mod user_service;

pub use context::ServiceContext;
