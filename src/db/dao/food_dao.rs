use super::DaoBase;
use crate::db::{entities::prelude::Food, store::Store};

#[derive(Clone)]
pub struct FoodDao {
    store: Store,
}

impl DaoBase for FoodDao {
    type Entity = Food;
    const ENTITY_NAME: &'static str = "food";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, Set, Value};
    use uuid::Uuid;

    use super::FoodDao;
    use crate::db::{
        dao::{DaoBase, DaoLayerError},
        entities::food,
        store::Store,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn food_model(food_id: &str, name: &str, price: f64) -> food::Model {
        food::Model {
            id: Uuid::new_v4(),
            food_id: food_id.to_string(),
            created_at: ts(),
            updated_at: ts(),
            name: name.to_string(),
            price,
            food_image: "https://img.example.com/food.png".to_string(),
            menu_id: "menu-1".to_string(),
        }
    }

    #[tokio::test]
    async fn find_by_key_reports_missing_food() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<food::Model>::new()])
            .into_connection();
        let dao = FoodDao::new(&Store::with_defaults(&db));

        let err = dao
            .find_by_key("nope")
            .await
            .expect_err("lookup should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "food", ref key } if key == "nope"
        ));
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[food_model("f1", "Pasta", 12.5)]])
            .into_connection();
        let dao = FoodDao::new(&Store::with_defaults(&db));

        let created = dao
            .create(food::ActiveModel {
                name: Set("Pasta".to_string()),
                price: Set(12.5),
                food_image: Set("https://img.example.com/food.png".to_string()),
                menu_id: Set("menu-1".to_string()),
                ..Default::default()
            })
            .await
            .expect("insert should succeed");
        assert_eq!(created.food_id, "f1");
    }

    #[tokio::test]
    async fn find_page_returns_total_and_slice() {
        let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(12)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row]])
            .append_query_results([[
                food_model("f1", "Soup", 4.0),
                food_model("f2", "Salad", 6.5),
            ]])
            .into_connection();
        let dao = FoodDao::new(&Store::with_defaults(&db));

        let page = dao.find_page(0, 2).await.expect("page should load");
        assert_eq!(page.total, 12);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "Salad");
    }
}
