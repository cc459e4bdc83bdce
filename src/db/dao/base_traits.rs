pub trait HasBusinessKey: sea_orm::EntityTrait {
    fn key_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait BusinessKeyActiveModel {
    fn set_key(&mut self, key: String);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
}

/// Business keys are 32 lowercase hex characters, unrelated to the row id.
pub fn mint_business_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
