//! Parking slot entity
//!
//! No stored occupancy column: availability is derived from bookings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parking_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub level_id: i32,

    /// Slot number, e.g. "A_1"
    #[sea_orm(unique)]
    pub slot_number: String,

    pub row: i32,
    pub column: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_level::Entity",
        from = "Column::LevelId",
        to = "super::parking_level::Column::Id"
    )]
    ParkingLevel,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::parking_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingLevel.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
