use sea_orm::Set;

use crate::{
    db::{
        dao::{DaoBase, TableDao},
        entities::table,
    },
    error::AppError,
};

#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    pub number_of_guests: Option<i32>,
    pub table_number: Option<i32>,
}

#[derive(Clone)]
pub struct TableService {
    table_dao: TableDao,
}

impl TableService {
    pub fn new(table_dao: TableDao) -> Self {
        Self { table_dao }
    }

    pub async fn list(&self) -> Result<Vec<table::Model>, AppError> {
        Ok(self.table_dao.list_all().await?)
    }

    pub async fn get(&self, table_id: &str) -> Result<table::Model, AppError> {
        Ok(self.table_dao.find_by_key(table_id).await?)
    }

    pub async fn create(
        &self,
        number_of_guests: i32,
        table_number: i32,
    ) -> Result<table::Model, AppError> {
        let model = table::ActiveModel {
            number_of_guests: Set(number_of_guests),
            table_number: Set(table_number),
            ..Default::default()
        };
        Ok(self.table_dao.create(model).await?)
    }

    pub async fn update(&self, table_id: &str, patch: TablePatch) -> Result<table::Model, AppError> {
        let updated = self
            .table_dao
            .update_by_key(table_id, move |active| {
                if let Some(guests) = patch.number_of_guests {
                    active.number_of_guests = Set(guests);
                }
                if let Some(number) = patch.table_number {
                    active.table_number = Set(number);
                }
            })
            .await?;
        Ok(updated)
    }
}
