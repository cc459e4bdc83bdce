#[allow(unused_imports)]
pub mod prelude {
    pub use super::food::Entity as Food;
    pub use super::invoice::Entity as Invoice;
    pub use super::menu::Entity as Menu;
    pub use super::order::Entity as Order;
    pub use super::order_item::Entity as OrderItem;
    pub use super::table::Entity as Table;
    pub use super::user::Entity as User;
}

pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;
