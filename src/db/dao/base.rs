use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::base_traits::{
    BusinessKeyActiveModel, HasBusinessKey, HasIdActiveModel, TimestampedActiveModel,
    mint_business_key,
};
use super::error::{DaoLayerError, DaoResult};
use crate::db::store::Store;

type Model<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type ActiveModel<D> = <<D as DaoBase>::Entity as EntityTrait>::ActiveModel;

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + HasIdActiveModel
        + BusinessKeyActiveModel
        + TimestampedActiveModel
        + Clone
        + Send
        + Sync,
{
    type Entity: EntityTrait + HasBusinessKey + Send + Sync;
    const ENTITY_NAME: &'static str;

    fn from_store(store: Store) -> Self;

    fn new(store: &Store) -> Self {
        Self::from_store(store.clone())
    }

    fn store(&self) -> &Store;

    fn not_found(key: &str) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            key: key.to_string(),
        }
    }

    /// Stamps the row id, a fresh business key and both timestamps.
    async fn create(
        &self,
        data: impl IntoActiveModel<ActiveModel<Self>> + Send,
    ) -> DaoResult<Model<Self>> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_id(Uuid::new_v4());
        active.set_key(mint_business_key());
        active.set_created_at(now);
        active.set_updated_at(now);

        self.store()
            .run("create", move |db| {
                let active = active.clone();
                async move { active.insert(&db).await }
            })
            .await
    }

    async fn find_optional_by_key(&self, key: &str) -> DaoResult<Option<Model<Self>>> {
        let key = key.to_string();
        self.store()
            .run("find_by_key", move |db| {
                let key = key.clone();
                async move {
                    Self::Entity::find()
                        .filter(Self::Entity::key_column().eq(key))
                        .one(&db)
                        .await
                }
            })
            .await
    }

    async fn find_by_key(&self, key: &str) -> DaoResult<Model<Self>> {
        self.find_optional_by_key(key)
            .await?
            .ok_or_else(|| Self::not_found(key))
    }

    async fn exists(&self, key: &str) -> DaoResult<bool> {
        Ok(self.find_optional_by_key(key).await?.is_some())
    }

    async fn list_all(&self) -> DaoResult<Vec<Model<Self>>> {
        self.store()
            .run("list_all", |db| async move {
                Self::Entity::find()
                    .order_by_asc(Self::Entity::created_at_column())
                    .all(&db)
                    .await
            })
            .await
    }

    /// Oldest first, so offsets stay stable while new rows arrive.
    async fn find_page(&self, offset: u64, limit: u64) -> DaoResult<Page<Model<Self>>> {
        let total = self
            .store()
            .run("count", |db| async move {
                Self::Entity::find().count(&db).await
            })
            .await?;

        let items = self
            .store()
            .run("find_page", move |db| async move {
                Self::Entity::find()
                    .order_by_asc(Self::Entity::created_at_column())
                    .offset(offset)
                    .limit(limit)
                    .all(&db)
                    .await
            })
            .await?;

        Ok(Page { items, total })
    }

    /// Read, patch, write back. Concurrent patches race; the last write wins.
    async fn update_by_key<F>(&self, key: &str, apply: F) -> DaoResult<Model<Self>>
    where
        F: for<'a> FnOnce(&'a mut ActiveModel<Self>) + Send,
    {
        let model = self.find_by_key(key).await?;
        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        self.store()
            .run("update", move |db| {
                let active = active.clone();
                async move { active.update(&db).await }
            })
            .await
    }
}
