use super::DaoBase;
use crate::db::{entities::prelude::Invoice, store::Store};

#[derive(Clone)]
pub struct InvoiceDao {
    store: Store,
}

impl DaoBase for InvoiceDao {
    type Entity = Invoice;
    const ENTITY_NAME: &'static str = "invoice";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}
