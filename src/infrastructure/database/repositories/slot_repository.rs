//! SeaORM implementation of SlotRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::slot::{ParkingSlot, SlotRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::parking_slot;

pub struct SeaOrmSlotRepository {
    db: DatabaseConnection,
}

impl SeaOrmSlotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: parking_slot::Model) -> ParkingSlot {
    ParkingSlot {
        id: m.id,
        level_id: m.level_id,
        slot_number: m.slot_number,
        row: m.row,
        column: m.column,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[async_trait]
impl SlotRepository for SeaOrmSlotRepository {
    async fn save(&self, s: ParkingSlot) -> DomainResult<()> {
        debug!("Saving slot: {}", s.slot_number);

        let model = parking_slot::ActiveModel {
            id: Set(s.id),
            level_id: Set(s.level_id),
            slot_number: Set(s.slot_number),
            row: Set(s.row),
            column: Set(s.column),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSlot>> {
        let model = parking_slot::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_number(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>> {
        let model = parking_slot::Entity::find()
            .filter(parking_slot::Column::SlotNumber.eq(slot_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_level(&self, level_id: i32) -> DomainResult<Vec<ParkingSlot>> {
        let models = parking_slot::Entity::find()
            .filter(parking_slot::Column::LevelId.eq(level_id))
            .order_by_asc(parking_slot::Column::Row)
            .order_by_asc(parking_slot::Column::Column)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSlot>> {
        let models = parking_slot::Entity::find()
            .order_by_asc(parking_slot::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
