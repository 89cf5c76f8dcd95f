use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    item::{ItemPage, ItemSearch, SaveItem},
};
use chrono::Utc;
use entity::item::{
    ActiveModel as ItemActive, Column, Entity as Item, ItemSellStatus, Model as ItemModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbBackend, EntityTrait,
    PaginatorTrait,
    QueryFilter, QueryOrder, Set, Statement,
};

impl PostgresService {
    /// Create-or-update keyed on identifier presence: no id inserts a fresh row
    /// and returns it with the generated key, an id re-saves the full record.
    pub async fn save_item(&self, payload: SaveItem) -> Result<ItemModel, AppError> {
        let now = Utc::now();

        match payload.id {
            None => {
                let new_item = ItemActive {
                    item_name: Set(payload.item_name),
                    price: Set(payload.price),
                    stock_number: Set(payload.stock_number),
                    item_detail: Set(payload.item_detail),
                    item_sell_status: Set(payload.item_sell_status),
                    reg_time: Set(Some(now)),
                    update_time: Set(Some(now)),
                    ..Default::default()
                };

                Ok(new_item.insert(&self.db).await?)
            }
            Some(id) => {
                let current = Item::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                // reg_time stays as written at creation
                let mut model: ItemActive = current.into();
                model.item_name = Set(payload.item_name);
                model.price = Set(payload.price);
                model.stock_number = Set(payload.stock_number);
                model.item_detail = Set(payload.item_detail);
                model.item_sell_status = Set(payload.item_sell_status);
                model.update_time = Set(Some(now));

                Ok(model.update(&self.db).await?)
            }
        }
    }

    pub async fn find_by_item_name(&self, item_name: &str) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .filter(Column::ItemName.eq(item_name))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_item_name_or_item_detail(
        &self,
        item_name: &str,
        item_detail: &str,
    ) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .filter(
                Condition::any()
                    .add(Column::ItemName.eq(item_name))
                    .add(Column::ItemDetail.eq(item_detail)),
            )
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_price_less_than(&self, price: i32) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .filter(Column::Price.lt(price))
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_price_less_than_order_by_price_desc(
        &self,
        price: i32,
    ) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .filter(Column::Price.lt(price))
            .order_by_desc(Column::Price)
            .all(&self.db)
            .await?)
    }

    /// Case-sensitive substring match on the detail text, priciest first.
    pub async fn find_by_item_detail(&self, item_detail: &str) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .filter(Column::ItemDetail.contains(item_detail))
            .order_by_desc(Column::Price)
            .all(&self.db)
            .await?)
    }

    /// Raw-SQL twin of [`Self::find_by_item_detail`], issued in the connection's
    /// own dialect instead of going through the query builder.
    pub async fn find_by_item_detail_native(
        &self,
        item_detail: &str,
    ) -> Result<Vec<ItemModel>, AppError> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Postgres => {
                "SELECT * FROM item WHERE item_detail LIKE $1 ORDER BY price DESC"
            }
            _ => "SELECT * FROM item WHERE item_detail LIKE ? ORDER BY price DESC",
        };

        Ok(Item::find()
            .from_raw_sql(Statement::from_sql_and_values(
                backend,
                sql,
                [format!("%{}%", item_detail).into()],
            ))
            .all(&self.db)
            .await?)
    }

    /// Dynamic AND-conjunction search: each filter contributes a clause only
    /// when present. Results come back one page at a time together with the
    /// total match count.
    pub async fn search_items(
        &self,
        search: ItemSearch,
        page: u64,
        page_size: u64,
    ) -> Result<ItemPage, AppError> {
        let mut cond = Condition::all();

        if let Some(item_detail) = &search.item_detail {
            cond = cond.add(Column::ItemDetail.contains(item_detail));
        }
        if let Some(min_price) = search.min_price {
            cond = cond.add(Column::Price.gt(min_price));
        }
        // The status clause only engages when the caller's token is exactly the
        // "SELL" literal; any other token ("SOLD_OUT" included) leaves the result
        // unfiltered by status.
        if search.sell_status.as_deref() == Some("SELL") {
            cond = cond.add(Column::ItemSellStatus.eq(ItemSellStatus::Sell));
        }

        let paginator = Item::find().filter(cond).paginate(&self.db, page_size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(ItemPage {
            items,
            total,
            page,
            page_size,
        })
    }
}
