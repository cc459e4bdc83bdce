use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "user_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub avatar: Option<String>,
    pub password_hash: String,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
