use sea_orm::Set;

use crate::{
    db::{
        dao::{DaoBase, OrderItemDao},
        entities::{order, order_item},
    },
    error::AppError,
    services::{order_service::OrderService, pricing::round_price},
};

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub quantity: String,
    pub unit_price: f64,
    pub food_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct OrderItemPatch {
    pub quantity: Option<String>,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: order::Model,
    pub items: Vec<order_item::Model>,
}

#[derive(Clone)]
pub struct OrderItemService {
    order_item_dao: OrderItemDao,
    orders: OrderService,
}

impl OrderItemService {
    pub fn new(order_item_dao: OrderItemDao, orders: OrderService) -> Self {
        Self {
            order_item_dao,
            orders,
        }
    }

    pub async fn list(&self) -> Result<Vec<order_item::Model>, AppError> {
        Ok(self.order_item_dao.list_all().await?)
    }

    pub async fn get(&self, order_item_id: &str) -> Result<order_item::Model, AppError> {
        Ok(self.order_item_dao.find_by_key(order_item_id).await?)
    }

    /// Opens an order on `table_id` and files every item under it.
    ///
    /// Not transactional: if an insert fails midway, the order and the items
    /// written so far stay behind.
    pub async fn place(
        &self,
        table_id: &str,
        items: Vec<NewOrderItem>,
    ) -> Result<PlacedOrder, AppError> {
        if items.is_empty() {
            return Err(AppError::bad_request("order_items must not be empty"));
        }

        let order = self.orders.create(table_id, None).await?;

        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let model = order_item::ActiveModel {
                quantity: Set(item.quantity),
                unit_price: Set(round_price(item.unit_price)),
                food_id: Set(item.food_id),
                order_id: Set(order.order_id.clone()),
                ..Default::default()
            };
            created.push(self.order_item_dao.create(model).await?);
        }

        Ok(PlacedOrder {
            order,
            items: created,
        })
    }

    pub async fn update(
        &self,
        order_item_id: &str,
        patch: OrderItemPatch,
    ) -> Result<order_item::Model, AppError> {
        let updated = self
            .order_item_dao
            .update_by_key(order_item_id, move |active| {
                if let Some(quantity) = patch.quantity {
                    active.quantity = Set(quantity);
                }
                if let Some(unit_price) = patch.unit_price {
                    active.unit_price = Set(round_price(unit_price));
                }
            })
            .await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::NewOrderItem;
    use crate::{
        db::entities::{order, order_item, table},
        error::AppError,
        test_helpers::mock_context,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn table_model() -> table::Model {
        table::Model {
            id: Uuid::new_v4(),
            table_id: "T1".to_string(),
            created_at: ts(),
            updated_at: ts(),
            number_of_guests: 4,
            table_number: 12,
        }
    }

    fn order_model() -> order::Model {
        order::Model {
            id: Uuid::new_v4(),
            order_id: "O1".to_string(),
            created_at: ts(),
            updated_at: ts(),
            order_date: ts(),
            table_id: "T1".to_string(),
        }
    }

    fn item_model(key: &str, unit_price: f64) -> order_item::Model {
        order_item::Model {
            id: Uuid::new_v4(),
            order_item_id: key.to_string(),
            created_at: ts(),
            updated_at: ts(),
            quantity: "M".to_string(),
            unit_price,
            food_id: "F1".to_string(),
            order_id: "O1".to_string(),
        }
    }

    fn new_item(unit_price: f64) -> NewOrderItem {
        NewOrderItem {
            quantity: "M".to_string(),
            unit_price,
            food_id: "F1".to_string(),
        }
    }

    #[tokio::test]
    async fn place_opens_order_then_files_items() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[table_model()]])
            .append_query_results([[order_model()]])
            .append_query_results([[item_model("I1", 2.01)]])
            .append_query_results([[item_model("I2", 7.5)]]);

        let placed = mock_context(mock)
            .order_item()
            .place("T1", vec![new_item(2.005), new_item(7.5)])
            .await
            .expect("order should be placed");

        assert_eq!(placed.order.order_id, "O1");
        assert_eq!(placed.items.len(), 2);
        assert!(placed.items.iter().all(|item| item.order_id == "O1"));
    }

    #[tokio::test]
    async fn empty_order_is_rejected_before_touching_the_store() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres);

        let err = mock_context(mock)
            .order_item()
            .place("T1", Vec::new())
            .await
            .expect_err("empty order should fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
