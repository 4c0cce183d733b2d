//! Booking history repository interface

use async_trait::async_trait;

use super::model::BookingRecord;
use crate::domain::DomainResult;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append one record to the feed
    async fn append(&self, record: BookingRecord) -> DomainResult<()>;

    /// Full feed, oldest first (export for analytics consumers)
    async fn find_all(&self) -> DomainResult<Vec<BookingRecord>>;
}
