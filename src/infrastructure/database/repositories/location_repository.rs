//! SeaORM implementations of the location hierarchy repositories

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::location::{
    LevelRepository, Location, LocationRepository, LotRepository, ParkingLevel, ParkingLot,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{location, parking_level, parking_lot};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Locations ───────────────────────────────────────────────────

pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn location_to_domain(m: location::Model) -> Location {
    Location {
        id: m.id,
        name: m.name,
        address: m.address,
        description: m.description,
        created_at: m.created_at,
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn save(&self, l: Location) -> DomainResult<()> {
        debug!("Saving location: {}", l.id);

        let model = location::ActiveModel {
            id: Set(l.id),
            name: Set(l.name),
            address: Set(l.address),
            description: Set(l.description),
            created_at: Set(l.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Location>> {
        let model = location::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(location_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        let models = location::Entity::find()
            .order_by_asc(location::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(location_to_domain).collect())
    }
}

// ── Lots ────────────────────────────────────────────────────────

pub struct SeaOrmLotRepository {
    db: DatabaseConnection,
}

impl SeaOrmLotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn lot_to_domain(m: parking_lot::Model) -> ParkingLot {
    ParkingLot {
        id: m.id,
        location_id: m.location_id,
        name: m.name,
        description: m.description,
        created_at: m.created_at,
    }
}

#[async_trait]
impl LotRepository for SeaOrmLotRepository {
    async fn save(&self, l: ParkingLot) -> DomainResult<()> {
        debug!("Saving lot: {}", l.id);

        let model = parking_lot::ActiveModel {
            id: Set(l.id),
            location_id: Set(l.location_id),
            name: Set(l.name),
            description: Set(l.description),
            created_at: Set(l.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLot>> {
        let model = parking_lot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(lot_to_domain))
    }

    async fn find_by_location(&self, location_id: i32) -> DomainResult<Vec<ParkingLot>> {
        let models = parking_lot::Entity::find()
            .filter(parking_lot::Column::LocationId.eq(location_id))
            .order_by_asc(parking_lot::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(lot_to_domain).collect())
    }
}

// ── Levels ──────────────────────────────────────────────────────

pub struct SeaOrmLevelRepository {
    db: DatabaseConnection,
}

impl SeaOrmLevelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn level_to_domain(m: parking_level::Model) -> ParkingLevel {
    ParkingLevel {
        id: m.id,
        lot_id: m.lot_id,
        level_name: m.level_name,
        level_order: m.level_order,
        rows: m.rows,
        columns: m.columns,
        created_at: m.created_at,
    }
}

#[async_trait]
impl LevelRepository for SeaOrmLevelRepository {
    async fn save(&self, l: ParkingLevel) -> DomainResult<()> {
        debug!("Saving level: {}", l.id);

        let model = parking_level::ActiveModel {
            id: Set(l.id),
            lot_id: Set(l.lot_id),
            level_name: Set(l.level_name),
            level_order: Set(l.level_order),
            rows: Set(l.rows),
            columns: Set(l.columns),
            created_at: Set(l.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLevel>> {
        let model = parking_level::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(level_to_domain))
    }

    async fn find_by_lot(&self, lot_id: i32) -> DomainResult<Vec<ParkingLevel>> {
        let models = parking_level::Entity::find()
            .filter(parking_level::Column::LotId.eq(lot_id))
            .order_by_asc(parking_level::Column::LevelOrder)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(level_to_domain).collect())
    }
}
