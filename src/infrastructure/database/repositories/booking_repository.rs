//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::booking::{Booking, BookingRepository, BookingStatus, BookingWindow};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let window = BookingWindow::new(m.start_time, m.end_time)
        .map_err(|e| DomainError::Storage(format!("corrupt booking {}: {}", m.id, e)))?;
    Ok(Booking {
        id: m.id,
        slot_id: m.slot_id,
        user_id: m.user_id,
        vehicle_number: m.vehicle_number,
        window,
        duration_hours: m.duration_hours,
        hourly_rate: m.hourly_rate,
        total_price: m.total_price,
        status: BookingStatus::from_str(&m.status),
        cancelled: m.cancelled,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(b: &Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: Set(b.id),
        slot_id: Set(b.slot_id),
        user_id: Set(b.user_id),
        vehicle_number: Set(b.vehicle_number.clone()),
        start_time: Set(b.window.start()),
        end_time: Set(b.window.end()),
        duration_hours: Set(b.duration_hours),
        hourly_rate: Set(b.hourly_rate),
        total_price: Set(b.total_price),
        status: Set(b.status.as_str().to_string()),
        cancelled: Set(b.cancelled),
        created_at: Set(b.created_at),
        updated_at: Set(b.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<()> {
        debug!("Saving booking: {}", b.id);
        domain_to_active(&b).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, b: Booking) -> DomainResult<()> {
        debug!("Updating booking: {}", b.id);

        let existing = booking::Entity::find_by_id(b.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: b.id.to_string(),
            });
        }

        domain_to_active(&b).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_overlapping(
        &self,
        slot_id: i32,
        window: &BookingWindow,
    ) -> DomainResult<Vec<Booking>> {
        // Half-open overlap on the database side:
        // start < window.end AND end > window.start, cancelled excluded.
        let models = booking::Entity::find()
            .filter(booking::Column::SlotId.eq(slot_id))
            .filter(booking::Column::Cancelled.eq(false))
            .filter(booking::Column::StartTime.lt(window.end()))
            .filter(booking::Column::EndTime.gt(window.start()))
            .order_by_asc(booking::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_occupying(
        &self,
        slot_id: i32,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find()
            .filter(booking::Column::SlotId.eq(slot_id))
            .filter(booking::Column::Cancelled.eq(false))
            .filter(booking::Column::StartTime.lte(at))
            .filter(booking::Column::EndTime.gt(at))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_for_user(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_page(&self, page: u32, limit: u32) -> DomainResult<(Vec<Booking>, u64)> {
        let page = page.max(1);
        let paginator = booking::Entity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .paginate(&self.db, u64::from(limit));

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(u64::from(page - 1))
            .await
            .map_err(db_err)?;
        let bookings = models
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((bookings, total))
    }

    async fn next_id(&self) -> i32 {
        booking::Entity::find()
            .all(&self.db)
            .await
            .map(|bs| bs.into_iter().map(|b| b.id).max().unwrap_or(0) + 1)
            .unwrap_or(1)
    }
}
