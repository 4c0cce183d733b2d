//! SeaORM implementation of HistoryRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::history::{BookingRecord, HistoryRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking_history;

pub struct SeaOrmHistoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: booking_history::Model) -> BookingRecord {
    BookingRecord {
        id: m.id,
        timestamp: m.timestamp,
        slot_id: m.slot_id,
        user_id: m.user_id,
        occupied: m.occupied,
        cancelled: m.cancelled,
        duration_hours: m.duration_hours,
        lead_time_hours: m.lead_time_hours,
        hour: m.hour,
        day_of_week: m.day_of_week,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[async_trait]
impl HistoryRepository for SeaOrmHistoryRepository {
    async fn append(&self, record: BookingRecord) -> DomainResult<()> {
        let id = booking_history::Entity::find()
            .all(&self.db)
            .await
            .map(|rs| rs.into_iter().map(|r| r.id).max().unwrap_or(0) + 1)
            .unwrap_or(1);

        debug!("Appending history record: {}", id);

        let model = booking_history::ActiveModel {
            id: Set(id),
            timestamp: Set(record.timestamp),
            slot_id: Set(record.slot_id),
            user_id: Set(record.user_id),
            occupied: Set(record.occupied),
            cancelled: Set(record.cancelled),
            duration_hours: Set(record.duration_hours),
            lead_time_hours: Set(record.lead_time_hours),
            hour: Set(record.hour),
            day_of_week: Set(record.day_of_week),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<BookingRecord>> {
        let models = booking_history::Entity::find()
            .order_by_asc(booking_history::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
