use chrono::Utc;
use sea_orm::{Set, prelude::DateTimeWithTimeZone};

use crate::{
    db::{
        dao::{DaoBase, OrderDao, TableDao},
        entities::order,
    },
    error::AppError,
};

#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub table_id: Option<String>,
    pub order_date: Option<DateTimeWithTimeZone>,
}

#[derive(Clone)]
pub struct OrderService {
    order_dao: OrderDao,
    table_dao: TableDao,
}

impl OrderService {
    pub fn new(order_dao: OrderDao, table_dao: TableDao) -> Self {
        Self {
            order_dao,
            table_dao,
        }
    }

    pub async fn list(&self) -> Result<Vec<order::Model>, AppError> {
        Ok(self.order_dao.list_all().await?)
    }

    pub async fn get(&self, order_id: &str) -> Result<order::Model, AppError> {
        Ok(self.order_dao.find_by_key(order_id).await?)
    }

    /// Opens an order on an existing table. `order_date` defaults to now.
    pub async fn create(
        &self,
        table_id: &str,
        order_date: Option<DateTimeWithTimeZone>,
    ) -> Result<order::Model, AppError> {
        self.require_table(table_id).await?;

        let model = order::ActiveModel {
            table_id: Set(table_id.to_string()),
            order_date: Set(order_date.unwrap_or_else(|| Utc::now().fixed_offset())),
            ..Default::default()
        };
        Ok(self.order_dao.create(model).await?)
    }

    pub async fn update(&self, order_id: &str, patch: OrderPatch) -> Result<order::Model, AppError> {
        if let Some(table_id) = patch.table_id.as_deref() {
            self.require_table(table_id).await?;
        }

        let updated = self
            .order_dao
            .update_by_key(order_id, move |active| {
                if let Some(table_id) = patch.table_id {
                    active.table_id = Set(table_id);
                }
                if let Some(order_date) = patch.order_date {
                    active.order_date = Set(order_date);
                }
            })
            .await?;
        Ok(updated)
    }

    async fn require_table(&self, table_id: &str) -> Result<(), AppError> {
        if !self.table_dao.exists(table_id).await? {
            return Err(AppError::not_found("table was not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::{db::entities::table, error::AppError, test_helpers::mock_context};

    #[tokio::test]
    async fn order_on_missing_table_is_not_found() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<table::Model>::new()]);

        let err = mock_context(mock)
            .order()
            .create("no-such-table", None)
            .await
            .expect_err("create should fail");
        assert!(matches!(err, AppError::NotFound(ref m) if m == "table was not found"));
    }
}
