pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod food_dao;
pub mod invoice_dao;
pub mod menu_dao;
pub mod order_dao;
pub mod order_item_dao;
pub mod table_dao;
pub mod user_dao;

pub use base::{DaoBase, Page};
pub use base_traits::{
    BusinessKeyActiveModel, HasBusinessKey, HasIdActiveModel, TimestampedActiveModel,
};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use food_dao::FoodDao;
pub use invoice_dao::InvoiceDao;
pub use menu_dao::MenuDao;
pub use order_dao::OrderDao;
pub use order_item_dao::{BillLineRow, OrderItemDao};
pub use table_dao::TableDao;
pub use user_dao::UserDao;
