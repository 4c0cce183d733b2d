//! In-memory repository implementation for development and testing

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::booking::{Booking, BookingRepository, BookingWindow};
use crate::domain::history::{BookingRecord, HistoryRepository};
use crate::domain::location::{
    LevelRepository, Location, LocationRepository, LotRepository, ParkingLevel, ParkingLot,
};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::slot::{ParkingSlot, SlotRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::{DomainError, DomainResult};

/// In-memory repositories backing every trait of [`RepositoryProvider`].
///
/// Used by the engine's tests and by the `database.url = "memory"` dev mode;
/// nothing survives a restart.
pub struct InMemoryRepositories {
    users: DashMap<i32, User>,
    locations: DashMap<i32, Location>,
    lots: DashMap<i32, ParkingLot>,
    levels: DashMap<i32, ParkingLevel>,
    slots: DashMap<i32, ParkingSlot>,
    bookings: DashMap<i32, Booking>,
    history: DashMap<i32, BookingRecord>,
    booking_counter: AtomicI32,
    history_counter: AtomicI32,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            locations: DashMap::new(),
            lots: DashMap::new(),
            levels: DashMap::new(),
            slots: DashMap::new(),
            bookings: DashMap::new(),
            history: DashMap::new(),
            booking_counter: AtomicI32::new(1),
            history_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositories {
    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn locations(&self) -> &dyn LocationRepository {
        self
    }

    fn lots(&self) -> &dyn LotRepository {
        self
    }

    fn levels(&self) -> &dyn LevelRepository {
        self
    }

    fn slots(&self) -> &dyn SlotRepository {
        self
    }

    fn bookings(&self) -> &dyn BookingRepository {
        self
    }

    fn history(&self) -> &dyn HistoryRepository {
        self
    }
}

// ── Users ───────────────────────────────────────────────────────

#[async_trait]
impl UserRepository for InMemoryRepositories {
    async fn save(&self, user: User) -> DomainResult<()> {
        if self.users.contains_key(&user.id) {
            return Err(DomainError::Validation(format!(
                "user {} already exists",
                user.id
            )));
        }
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn increment_booking_count(&self, id: i32) -> DomainResult<()> {
        let mut user = self.users.get_mut(&id).ok_or(DomainError::NotFound {
            entity: "User",
            field: "id",
            value: id.to_string(),
        })?;
        user.booking_count += 1;
        Ok(())
    }
}

// ── Locations / lots / levels ───────────────────────────────────

#[async_trait]
impl LocationRepository for InMemoryRepositories {
    async fn save(&self, location: Location) -> DomainResult<()> {
        self.locations.insert(location.id, location);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Location>> {
        Ok(self.locations.get(&id).map(|l| l.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        let mut all: Vec<Location> = self.locations.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|l| l.id);
        Ok(all)
    }
}

#[async_trait]
impl LotRepository for InMemoryRepositories {
    async fn save(&self, lot: ParkingLot) -> DomainResult<()> {
        self.lots.insert(lot.id, lot);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLot>> {
        Ok(self.lots.get(&id).map(|l| l.clone()))
    }

    async fn find_by_location(&self, location_id: i32) -> DomainResult<Vec<ParkingLot>> {
        let mut lots: Vec<ParkingLot> = self
            .lots
            .iter()
            .filter(|l| l.location_id == location_id)
            .map(|l| l.value().clone())
            .collect();
        lots.sort_by_key(|l| l.id);
        Ok(lots)
    }
}

#[async_trait]
impl LevelRepository for InMemoryRepositories {
    async fn save(&self, level: ParkingLevel) -> DomainResult<()> {
        self.levels.insert(level.id, level);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLevel>> {
        Ok(self.levels.get(&id).map(|l| l.clone()))
    }

    async fn find_by_lot(&self, lot_id: i32) -> DomainResult<Vec<ParkingLevel>> {
        let mut levels: Vec<ParkingLevel> = self
            .levels
            .iter()
            .filter(|l| l.lot_id == lot_id)
            .map(|l| l.value().clone())
            .collect();
        levels.sort_by_key(|l| l.level_order);
        Ok(levels)
    }
}

// ── Slots ───────────────────────────────────────────────────────

#[async_trait]
impl SlotRepository for InMemoryRepositories {
    async fn save(&self, slot: ParkingSlot) -> DomainResult<()> {
        self.slots.insert(slot.id, slot);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSlot>> {
        Ok(self.slots.get(&id).map(|s| s.clone()))
    }

    async fn find_by_number(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>> {
        Ok(self
            .slots
            .iter()
            .find(|s| s.slot_number == slot_number)
            .map(|s| s.value().clone()))
    }

    async fn find_by_level(&self, level_id: i32) -> DomainResult<Vec<ParkingSlot>> {
        let mut slots: Vec<ParkingSlot> = self
            .slots
            .iter()
            .filter(|s| s.level_id == level_id)
            .map(|s| s.value().clone())
            .collect();
        slots.sort_by_key(|s| (s.row, s.column));
        Ok(slots)
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSlot>> {
        let mut slots: Vec<ParkingSlot> = self.slots.iter().map(|s| s.value().clone()).collect();
        slots.sort_by_key(|s| s.id);
        Ok(slots)
    }
}

// ── Bookings ────────────────────────────────────────────────────

#[async_trait]
impl BookingRepository for InMemoryRepositories {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        if !self.bookings.contains_key(&booking.id) {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking.id.to_string(),
            });
        }
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn find_overlapping(
        &self,
        slot_id: i32,
        window: &BookingWindow,
    ) -> DomainResult<Vec<Booking>> {
        let mut hits: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.slot_id == slot_id && b.blocks_slot() && b.window.overlaps(window))
            .map(|b| b.clone())
            .collect();
        hits.sort_by_key(|b| b.window.start());
        Ok(hits)
    }

    async fn find_occupying(
        &self,
        slot_id: i32,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.slot_id == slot_id && b.occupies_at(at))
            .map(|b| b.clone()))
    }

    async fn find_for_user(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| b.clone())
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        bookings.truncate(limit as usize);
        Ok(bookings)
    }

    async fn find_page(&self, page: u32, limit: u32) -> DomainResult<(Vec<Booking>, u64)> {
        let mut all: Vec<Booking> = self.bookings.iter().map(|b| b.clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = all.len() as u64;
        let page = page.max(1);
        let start = ((page - 1) * limit) as usize;
        let items = all.into_iter().skip(start).take(limit as usize).collect();
        Ok((items, total))
    }

    async fn next_id(&self) -> i32 {
        self.booking_counter.fetch_add(1, Ordering::SeqCst)
    }
}

// ── History ─────────────────────────────────────────────────────

#[async_trait]
impl HistoryRepository for InMemoryRepositories {
    async fn append(&self, mut record: BookingRecord) -> DomainResult<()> {
        let id = self.history_counter.fetch_add(1, Ordering::SeqCst);
        record.id = id;
        self.history.insert(id, record);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<BookingRecord>> {
        let mut all: Vec<BookingRecord> = self.history.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }
}
