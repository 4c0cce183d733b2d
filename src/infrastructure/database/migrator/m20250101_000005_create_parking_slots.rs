//! Create parking_slots table
//!
//! Deliberately no occupancy column: a slot's availability is derived from
//! its bookings at query time.

use sea_orm_migration::prelude::*;

use super::m20250101_000004_create_parking_levels::ParkingLevels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSlots::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingSlots::LevelId).integer().not_null())
                    .col(
                        ColumnDef::new(ParkingSlots::SlotNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ParkingSlots::Row).integer().not_null())
                    .col(ColumnDef::new(ParkingSlots::Column).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_slots_level")
                            .from(ParkingSlots::Table, ParkingSlots::LevelId)
                            .to(ParkingLevels::Table, ParkingLevels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_slots_level")
                    .table(ParkingSlots::Table)
                    .col(ParkingSlots::LevelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_slots_number")
                    .table(ParkingSlots::Table)
                    .col(ParkingSlots::SlotNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSlots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingSlots {
    Table,
    Id,
    LevelId,
    SlotNumber,
    Row,
    Column,
}
