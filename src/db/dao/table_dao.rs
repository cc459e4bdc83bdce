use super::DaoBase;
use crate::db::{entities::prelude::Table, store::Store};

#[derive(Clone)]
pub struct TableDao {
    store: Store,
}

impl DaoBase for TableDao {
    type Entity = Table;
    const ENTITY_NAME: &'static str = "table";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}
