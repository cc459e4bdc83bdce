use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(key = "invoice_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(indexed)]
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub payment_due_date: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}
