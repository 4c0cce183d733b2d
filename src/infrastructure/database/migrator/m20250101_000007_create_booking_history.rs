//! Create booking_history table (append-only analytics feed)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingHistory::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BookingHistory::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookingHistory::SlotId).string().not_null())
                    .col(ColumnDef::new(BookingHistory::UserId).string().not_null())
                    .col(
                        ColumnDef::new(BookingHistory::Occupied)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(BookingHistory::Cancelled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(BookingHistory::DurationHours)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingHistory::LeadTimeHours)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(BookingHistory::Hour).integer().not_null())
                    .col(
                        ColumnDef::new(BookingHistory::DayOfWeek)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_history_timestamp")
                    .table(BookingHistory::Table)
                    .col(BookingHistory::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BookingHistory {
    Table,
    Id,
    Timestamp,
    SlotId,
    UserId,
    Occupied,
    Cancelled,
    DurationHours,
    LeadTimeHours,
    Hour,
    DayOfWeek,
}
