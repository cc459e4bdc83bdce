use super::{
    DaoBase, FoodDao, InvoiceDao, MenuDao, OrderDao, OrderItemDao, TableDao, UserDao,
};
use crate::db::store::Store;

#[derive(Clone)]
pub struct DaoContext {
    store: Store,
}

impl DaoContext {
    pub fn new(store: &Store) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub fn food(&self) -> FoodDao {
        DaoBase::new(&self.store)
    }

    pub fn menu(&self) -> MenuDao {
        DaoBase::new(&self.store)
    }

    pub fn table(&self) -> TableDao {
        DaoBase::new(&self.store)
    }

    pub fn order(&self) -> OrderDao {
        DaoBase::new(&self.store)
    }

    pub fn order_item(&self) -> OrderItemDao {
        DaoBase::new(&self.store)
    }

    pub fn invoice(&self) -> InvoiceDao {
        DaoBase::new(&self.store)
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.store)
    }
}
