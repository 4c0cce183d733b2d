//! Repository provider interface

use crate::domain::booking::BookingRepository;
use crate::domain::history::HistoryRepository;
use crate::domain::location::{LevelRepository, LocationRepository, LotRepository};
use crate::domain::slot::SlotRepository;
use crate::domain::user::UserRepository;

/// Bundle of per-aggregate repositories behind one injection point.
///
/// ```ignore
/// let slot = repos.slots().find_by_number("A_1").await?;
/// let hits = repos.bookings().find_overlapping(slot.id, &window).await?;
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;

    fn locations(&self) -> &dyn LocationRepository;

    fn lots(&self) -> &dyn LotRepository;

    fn levels(&self) -> &dyn LevelRepository;

    fn slots(&self) -> &dyn SlotRepository;

    fn bookings(&self) -> &dyn BookingRepository;

    fn history(&self) -> &dyn HistoryRepository;
}
