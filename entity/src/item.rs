use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Stored as the symbolic name, never the ordinal: a reordered enum must not
// reinterpret rows already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ItemSellStatus {
    #[sea_orm(string_value = "SELL")]
    Sell,
    #[sea_orm(string_value = "SOLD_OUT")]
    SoldOut,
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "item_id")]
    pub id: i32,
    pub item_name: String,
    pub price: i32,
    pub stock_number: i32,
    #[sea_orm(column_type = "Text")]
    pub item_detail: String,
    pub item_sell_status: Option<ItemSellStatus>,
    pub reg_time: Option<DateTimeUtc>,
    pub update_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
