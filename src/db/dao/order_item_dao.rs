use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, Statement};
use serde::Serialize;

use super::{DaoBase, DaoResult};
use crate::db::{
    entities::prelude::OrderItem,
    store::Store,
};

/// One order item joined with its food, order and table.
///
/// Every join is a left join, so any column that came from a joined table is
/// null when the referenced row is gone.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct BillLineRow {
    pub amount: Option<f64>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<String>,
}

const BILL_LINES_SQL: &str = "SELECT \
    f.price AS amount, \
    f.name AS food_name, \
    f.food_image AS food_image, \
    t.table_number AS table_number, \
    t.table_id AS table_id, \
    o.order_id AS order_id, \
    oi.unit_price AS unit_price, \
    oi.quantity AS quantity \
FROM order_items oi \
LEFT JOIN foods f ON f.food_id = oi.food_id \
LEFT JOIN orders o ON o.order_id = oi.order_id \
LEFT JOIN tables t ON t.table_id = o.table_id \
WHERE oi.order_id = {param} \
ORDER BY oi.created_at ASC";

fn bill_lines_sql(backend: DatabaseBackend) -> String {
    let param = match backend {
        DatabaseBackend::Postgres => "$1",
        _ => "?",
    };
    BILL_LINES_SQL.replace("{param}", param)
}

#[derive(Clone)]
pub struct OrderItemDao {
    store: Store,
}

impl DaoBase for OrderItemDao {
    type Entity = OrderItem;
    const ENTITY_NAME: &'static str = "order item";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}

impl OrderItemDao {
    /// Filters items by order and resolves the three joins in one statement.
    pub async fn bill_lines(&self, order_id: &str) -> DaoResult<Vec<BillLineRow>> {
        let order_id = order_id.to_string();
        self.store
            .run("bill_lines", move |db| {
                let order_id = order_id.clone();
                async move {
                    let backend = db.get_database_backend();
                    let stmt = Statement::from_sql_and_values(
                        backend,
                        bill_lines_sql(backend),
                        [order_id.into()],
                    );
                    BillLineRow::find_by_statement(stmt).all(&db).await
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::{OrderItemDao, bill_lines_sql};
    use crate::db::{dao::DaoBase, store::Store};

    fn line(price: f64, name: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("amount", Value::from(price)),
            ("food_name", Value::from(name.to_string())),
            ("food_image", Value::from(None::<String>)),
            ("table_number", Value::from(4i32)),
            ("table_id", Value::from("t1".to_string())),
            ("order_id", Value::from("O1".to_string())),
            ("unit_price", Value::from(price)),
            ("quantity", Value::from("M".to_string())),
        ])
    }

    #[test]
    fn placeholder_follows_backend() {
        assert!(bill_lines_sql(DatabaseBackend::Postgres).contains("oi.order_id = $1"));
        assert!(bill_lines_sql(DatabaseBackend::Sqlite).contains("oi.order_id = ?"));
    }

    #[tokio::test]
    async fn bill_lines_decodes_joined_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[line(10.0, "Steak"), line(5.5, "Fries")]])
            .into_connection();
        let dao = OrderItemDao::new(&Store::with_defaults(&db));

        let rows = dao.bill_lines("O1").await.expect("query should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, Some(10.0));
        assert_eq!(rows[1].food_name.as_deref(), Some("Fries"));
        assert_eq!(rows[0].food_image, None);
        assert_eq!(rows[0].table_number, Some(4));
    }
}
