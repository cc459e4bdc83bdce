use sea_orm::Set;

use crate::{
    db::{
        dao::{DaoBase, FoodDao, MenuDao, Page},
        entities::food,
    },
    error::AppError,
    services::pricing::round_price,
};

#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

#[derive(Clone)]
pub struct FoodService {
    food_dao: FoodDao,
    menu_dao: MenuDao,
}

impl FoodService {
    pub fn new(food_dao: FoodDao, menu_dao: MenuDao) -> Self {
        Self { food_dao, menu_dao }
    }

    pub async fn list_page(&self, offset: u64, limit: u64) -> Result<Page<food::Model>, AppError> {
        Ok(self.food_dao.find_page(offset, limit).await?)
    }

    pub async fn get(&self, food_id: &str) -> Result<food::Model, AppError> {
        Ok(self.food_dao.find_by_key(food_id).await?)
    }

    pub async fn create(&self, input: NewFood) -> Result<food::Model, AppError> {
        self.require_menu(&input.menu_id).await?;

        let model = food::ActiveModel {
            name: Set(input.name),
            price: Set(round_price(input.price)),
            food_image: Set(input.food_image),
            menu_id: Set(input.menu_id),
            ..Default::default()
        };
        Ok(self.food_dao.create(model).await?)
    }

    pub async fn update(&self, food_id: &str, patch: FoodPatch) -> Result<food::Model, AppError> {
        if let Some(menu_id) = patch.menu_id.as_deref() {
            self.require_menu(menu_id).await?;
        }

        let updated = self
            .food_dao
            .update_by_key(food_id, move |active| {
                if let Some(name) = patch.name {
                    active.name = Set(name);
                }
                if let Some(price) = patch.price {
                    active.price = Set(round_price(price));
                }
                if let Some(food_image) = patch.food_image {
                    active.food_image = Set(food_image);
                }
                if let Some(menu_id) = patch.menu_id {
                    active.menu_id = Set(menu_id);
                }
            })
            .await?;
        Ok(updated)
    }

    async fn require_menu(&self, menu_id: &str) -> Result<(), AppError> {
        if !self.menu_dao.exists(menu_id).await? {
            return Err(AppError::not_found("menu was not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::{FoodService, NewFood};
    use crate::{
        db::entities::{food, menu},
        error::AppError,
        services::ServiceContext,
        test_helpers::mock_context,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn menu_model() -> menu::Model {
        menu::Model {
            id: Uuid::new_v4(),
            menu_id: "m1".to_string(),
            created_at: ts(),
            updated_at: ts(),
            name: "Dinner".to_string(),
            category: "main".to_string(),
            start_date: None,
            end_date: None,
        }
    }

    fn food_model(price: f64) -> food::Model {
        food::Model {
            id: Uuid::new_v4(),
            food_id: "f1".to_string(),
            created_at: ts(),
            updated_at: ts(),
            name: "Risotto".to_string(),
            price,
            food_image: "risotto.png".to_string(),
            menu_id: "m1".to_string(),
        }
    }

    fn service(mock: MockDatabase) -> FoodService {
        let ctx: ServiceContext = mock_context(mock);
        ctx.food()
    }

    fn new_food(menu_id: &str) -> NewFood {
        NewFood {
            name: "Risotto".to_string(),
            price: 12.345,
            food_image: "risotto.png".to_string(),
            menu_id: menu_id.to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_menu() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<menu::Model>::new()]);

        let err = service(mock)
            .create(new_food("missing"))
            .await
            .expect_err("create should fail");
        assert!(matches!(err, AppError::NotFound(ref m) if m == "menu was not found"));
    }

    #[tokio::test]
    async fn create_inserts_when_menu_exists() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[menu_model()]])
            .append_query_results([[food_model(12.35)]]);

        let created = service(mock)
            .create(new_food("m1"))
            .await
            .expect("create should succeed");
        assert_eq!(created.price, 12.35);
        assert_eq!(created.food_id, "f1");
    }
}
