use super::DaoBase;
use crate::db::{entities::prelude::Menu, store::Store};

#[derive(Clone)]
pub struct MenuDao {
    store: Store,
}

impl DaoBase for MenuDao {
    type Entity = Menu;
    const ENTITY_NAME: &'static str = "menu";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}
