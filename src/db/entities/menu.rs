use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "menu_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

impl ActiveModelBehavior for ActiveModel {}
