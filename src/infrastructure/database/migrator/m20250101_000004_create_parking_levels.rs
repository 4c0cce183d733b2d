//! Create parking_levels table

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_parking_lots::ParkingLots;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingLevels::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingLevels::LotId).integer().not_null())
                    .col(ColumnDef::new(ParkingLevels::LevelName).string().not_null())
                    .col(
                        ColumnDef::new(ParkingLevels::LevelOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ParkingLevels::Rows)
                            .integer()
                            .not_null()
                            .default(6),
                    )
                    .col(
                        ColumnDef::new(ParkingLevels::Columns)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(ParkingLevels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_levels_lot")
                            .from(ParkingLevels::Table, ParkingLevels::LotId)
                            .to(ParkingLots::Table, ParkingLots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_levels_lot")
                    .table(ParkingLevels::Table)
                    .col(ParkingLevels::LotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingLevels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingLevels {
    Table,
    Id,
    LotId,
    LevelName,
    LevelOrder,
    Rows,
    Columns,
    CreatedAt,
}
