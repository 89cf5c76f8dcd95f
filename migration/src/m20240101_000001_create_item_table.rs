use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .col(
                        ColumnDef::new(Item::ItemId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Item::ItemName)
                            .string_len(50)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Price)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::StockNumber)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::ItemDetail)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::ItemSellStatus)
                            .string_len(20)
                    )
                    .col(
                        ColumnDef::new(Item::RegTime)
                            .timestamp_with_time_zone()
                    )
                    .col(
                        ColumnDef::new(Item::UpdateTime)
                            .timestamp_with_time_zone()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Item::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    Table,
    ItemId,
    ItemName,
    Price,
    StockNumber,
    ItemDetail,
    ItemSellStatus,
    RegTime,
    UpdateTime,
}
