use entity::item::ItemSellStatus;
use serde::{Deserialize, Serialize};

/// Full-record save payload. A present `id` re-saves that row, an absent one
/// inserts.
#[derive(Serialize, Deserialize, Debug)]
pub struct SaveItem {
    pub id: Option<i32>,
    pub item_name: String,
    pub price: i32,
    pub stock_number: i32,
    pub item_detail: String,
    pub item_sell_status: Option<ItemSellStatus>,
}

/// Optional filters for the paginated search; absent fields contribute no
/// clause. `sell_status` is the caller's raw status token, not the enum.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ItemSearch {
    pub item_detail: Option<String>,
    pub min_price: Option<i32>,
    pub sell_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ItemPage {
    pub items: Vec<entity::item::Model>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}
