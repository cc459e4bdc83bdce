use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "table_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tables")]
pub struct Model {
    pub number_of_guests: i32,
    pub table_number: i32,
}

impl ActiveModelBehavior for ActiveModel {}
