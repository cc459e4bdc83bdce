use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "order_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    pub order_date: DateTimeWithTimeZone,
    #[sea_orm(indexed)]
    pub table_id: String,
}

impl ActiveModelBehavior for ActiveModel {}
