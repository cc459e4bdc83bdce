use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "order_item_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// Portion label as entered by staff, e.g. "S", "M", "L".
    pub quantity: String,
    pub unit_price: f64,
    pub food_id: String,
    #[sea_orm(indexed)]
    pub order_id: String,
}

impl ActiveModelBehavior for ActiveModel {}
