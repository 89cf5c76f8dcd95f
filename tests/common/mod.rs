use std::sync::Arc;

use sea_orm::ConnectOptions;
use shop_catalog::db::postgres_service::PostgresService;

pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Same connect-and-migrate path production takes, pointed at an
        // in-memory store. One connection, or every pool checkout would see
        // its own empty database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Arc::new(
            PostgresService::new(options)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use entity::item::ItemSellStatus;
    use shop_catalog::types::item::SaveItem;

    pub fn sample_item() -> SaveItem {
        SaveItem {
            id: None,
            item_name: "Test item".to_string(),
            price: 10000,
            stock_number: 100,
            item_detail: "Test item detail".to_string(),
            item_sell_status: Some(ItemSellStatus::Sell),
        }
    }

    /// Ten items on sale, priced 10001 through 10010.
    pub fn sample_item_list() -> Vec<SaveItem> {
        (1..=10)
            .map(|i| SaveItem {
                id: None,
                item_name: format!("Sample item{}", i),
                price: 10000 + i,
                stock_number: 100,
                item_detail: format!("Sample item detail{}", i),
                item_sell_status: Some(ItemSellStatus::Sell),
            })
            .collect()
    }

    /// Same ten on-sale items plus five sold-out ones priced 10011 through
    /// 10015, for the status-sensitive search scenarios.
    pub fn sample_item_list_with_sold_out() -> Vec<SaveItem> {
        let mut items = sample_item_list();
        items.extend((11..=15).map(|i| SaveItem {
            id: None,
            item_name: format!("Sample item{}", i),
            price: 10000 + i,
            stock_number: 0,
            item_detail: format!("Sample item detail{}", i),
            item_sell_status: Some(ItemSellStatus::SoldOut),
        }));
        items
    }
}
