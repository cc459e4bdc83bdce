use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "food_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    #[sea_orm(indexed)]
    pub menu_id: String,
}

impl ActiveModelBehavior for ActiveModel {}
