use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, sea_query::Expr};

use super::{DaoBase, DaoResult};
use crate::db::{
    entities::{prelude::User, user},
    store::Store,
};

#[derive(Clone)]
pub struct UserDao {
    store: Store,
}

impl DaoBase for UserDao {
    type Entity = User;
    const ENTITY_NAME: &'static str = "user";

    fn from_store(store: Store) -> Self {
        Self { store }
    }

    fn store(&self) -> &Store {
        &self.store
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.store
            .run("find_by_email", move |db| {
                let email = email.clone();
                async move {
                    User::find()
                        .filter(user::Column::Email.eq(email))
                        .one(&db)
                        .await
                }
            })
            .await
    }

    /// Any user already holding either contact detail.
    pub async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> DaoResult<Option<user::Model>> {
        let (email, phone) = (email.to_string(), phone.to_string());
        self.store
            .run("find_by_email_or_phone", move |db| {
                let (email, phone) = (email.clone(), phone.clone());
                async move {
                    User::find()
                        .filter(
                            Condition::any()
                                .add(user::Column::Email.eq(email))
                                .add(user::Column::Phone.eq(phone)),
                        )
                        .one(&db)
                        .await
                }
            })
            .await
    }

    pub async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> DaoResult<Option<user::Model>> {
        let refresh_token = refresh_token.to_string();
        self.store
            .run("find_by_refresh_token", move |db| {
                let refresh_token = refresh_token.clone();
                async move {
                    User::find()
                        .filter(user::Column::RefreshToken.eq(refresh_token))
                        .one(&db)
                        .await
                }
            })
            .await
    }

    /// Overwrites the stored token pair. Reissuing the same write is harmless.
    pub async fn update_tokens(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> DaoResult<()> {
        let owned = (
            user_id.to_string(),
            access_token.to_string(),
            refresh_token.to_string(),
        );
        let result = self
            .store
            .run("update_tokens", move |db| {
                let (user_id, access_token, refresh_token) = owned.clone();
                async move {
                    User::update_many()
                        .col_expr(user::Column::Token, Expr::value(access_token))
                        .col_expr(user::Column::RefreshToken, Expr::value(refresh_token))
                        .col_expr(
                            user::Column::UpdatedAt,
                            Expr::value(Utc::now().fixed_offset()),
                        )
                        .filter(user::Column::UserId.eq(user_id))
                        .exec(&db)
                        .await
                }
            })
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(user_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::UserDao;
    use crate::db::{
        dao::{DaoBase, DaoLayerError},
        entities::user,
        store::Store,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn user_model(user_id: &str, email: &str) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            created_at: ts(),
            updated_at: ts(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            phone: "+15550100".to_string(),
            avatar: None,
            password_hash: "hash".to_string(),
            token: None,
            refresh_token: None,
        }
    }

    fn dao(db: sea_orm::DatabaseConnection) -> UserDao {
        UserDao::new(&Store::with_defaults(&db))
    }

    #[tokio::test]
    async fn find_by_email_returns_first_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model("u1", "ada@example.com")]])
            .into_connection();

        let found = dao(db)
            .find_by_email("ada@example.com")
            .await
            .expect("query should succeed");
        assert_eq!(found.map(|u| u.user_id), Some("u1".to_string()));
    }

    #[tokio::test]
    async fn find_by_email_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let found = dao(db)
            .find_by_email("missing@example.com")
            .await
            .expect("query should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_tokens_succeeds_when_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        dao(db)
            .update_tokens("u1", "access", "refresh")
            .await
            .expect("update should succeed");
    }

    #[tokio::test]
    async fn update_tokens_reports_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = dao(db)
            .update_tokens("ghost", "access", "refresh")
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::NotFound { entity: "user", .. }));
    }

    #[tokio::test]
    async fn update_tokens_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("update failed".to_string())])
            .into_connection();

        let err = dao(db)
            .update_tokens("u1", "access", "refresh")
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
