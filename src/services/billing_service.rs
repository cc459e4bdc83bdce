use serde::Serialize;

use crate::{
    db::dao::{BillLineRow, OrderItemDao},
    error::AppError,
};

/// Per-order bill. Computed on request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub payment_due: f64,
    pub total_count: u64,
    pub table_number: Option<i32>,
    pub order_items: Vec<BillLineRow>,
}

type GroupKey = (Option<String>, Option<String>, Option<i32>);

/// Groups joined rows by (order id, table id, table number), keeping groups
/// in the order their first row arrived.
///
/// `payment_due` is the plain sum of the non-null amounts; prices were
/// already rounded when they were written.
pub fn group_bill_lines(rows: Vec<BillLineRow>) -> Vec<Bill> {
    let mut groups: Vec<(GroupKey, Bill)> = Vec::new();

    for row in rows {
        let key = (row.order_id.clone(), row.table_id.clone(), row.table_number);
        let index = match groups.iter().position(|(existing, _)| *existing == key) {
            Some(index) => index,
            None => {
                groups.push((
                    key,
                    Bill {
                        payment_due: 0.0,
                        total_count: 0,
                        table_number: row.table_number,
                        order_items: Vec::new(),
                    },
                ));
                groups.len() - 1
            }
        };

        let bill = &mut groups[index].1;
        bill.payment_due += row.amount.unwrap_or(0.0);
        bill.total_count += 1;
        bill.order_items.push(row);
    }

    groups.into_iter().map(|(_, bill)| bill).collect()
}

#[derive(Clone)]
pub struct BillingService {
    order_item_dao: OrderItemDao,
}

impl BillingService {
    pub fn new(order_item_dao: OrderItemDao) -> Self {
        Self { order_item_dao }
    }

    /// An order without items has no bill: that is `NotFound`, never a zero bill.
    pub async fn compute_bill(&self, order_id: &str) -> Result<Bill, AppError> {
        let rows = self.order_item_dao.bill_lines(order_id).await?;
        let mut bills = group_bill_lines(rows).into_iter();

        let bill = bills
            .next()
            .ok_or_else(|| AppError::not_found(format!("no order items found for order {order_id}")))?;

        let extra = bills.count();
        if extra > 0 {
            tracing::warn!(order_id, extra, "order items resolved to more than one bill group");
        }
        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::{BillingService, group_bill_lines};
    use crate::{
        db::{
            dao::{BillLineRow, DaoBase, OrderItemDao},
            store::Store,
        },
        error::AppError,
    };

    fn row(amount: Option<f64>, order_id: &str, table_id: &str, table_number: i32) -> BillLineRow {
        BillLineRow {
            amount,
            food_name: amount.map(|_| "dish".to_string()),
            food_image: None,
            table_number: Some(table_number),
            table_id: Some(table_id.to_string()),
            order_id: Some(order_id.to_string()),
            unit_price: amount,
            quantity: Some("M".to_string()),
        }
    }

    fn mock_row(price: f64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("amount", Value::from(price)),
            ("food_name", Value::from("dish".to_string())),
            ("food_image", Value::from("img.png".to_string())),
            ("table_number", Value::from(7i32)),
            ("table_id", Value::from("T1".to_string())),
            ("order_id", Value::from("O1".to_string())),
            ("unit_price", Value::from(price)),
            ("quantity", Value::from("L".to_string())),
        ])
    }

    fn service(db: sea_orm::DatabaseConnection) -> BillingService {
        BillingService::new(OrderItemDao::new(&Store::with_defaults(&db)))
    }

    #[test]
    fn sums_amounts_and_counts_lines() {
        let bills = group_bill_lines(vec![
            row(Some(10.0), "O1", "T1", 7),
            row(Some(5.5), "O1", "T1", 7),
            row(Some(3.25), "O1", "T1", 7),
        ]);

        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].payment_due, 18.75);
        assert_eq!(bills[0].total_count, 3);
        assert_eq!(bills[0].table_number, Some(7));
        assert_eq!(bills[0].order_items.len(), 3);
    }

    #[test]
    fn line_with_unknown_food_counts_but_adds_nothing() {
        let bills = group_bill_lines(vec![row(Some(4.0), "O1", "T1", 2), row(None, "O1", "T1", 2)]);

        assert_eq!(bills[0].payment_due, 4.0);
        assert_eq!(bills[0].total_count, 2);
        assert_eq!(bills[0].order_items[1].food_name, None);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let bills = group_bill_lines(vec![
            row(Some(1.0), "O2", "T9", 9),
            row(Some(2.0), "O1", "T1", 1),
            row(Some(3.0), "O2", "T9", 9),
        ]);

        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].table_number, Some(9));
        assert_eq!(bills[0].payment_due, 4.0);
        assert_eq!(bills[1].payment_due, 2.0);
    }

    #[test]
    fn no_rows_means_no_bill() {
        assert!(group_bill_lines(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn compute_bill_totals_three_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[mock_row(10.0), mock_row(5.5), mock_row(3.25)]])
            .into_connection();

        let bill = service(db)
            .compute_bill("O1")
            .await
            .expect("bill should compute");
        assert_eq!(bill.payment_due, 18.75);
        assert_eq!(bill.total_count, 3);
        assert_eq!(bill.order_items.len(), 3);
        assert_eq!(bill.table_number, Some(7));
    }

    #[tokio::test]
    async fn compute_bill_for_unknown_order_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();

        let err = service(db)
            .compute_bill("unknown-order")
            .await
            .expect_err("bill should be missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
