use super::DaoBase;
use crate::db::{entities::prelude::Order, store::Store};

#[derive(Clone)]
pub struct OrderDao {
    store: Store,
}

impl DaoBase for OrderDao {
    type Entity = Order;
    const ENTITY_NAME: &'static str = "order";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}
