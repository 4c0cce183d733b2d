//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub slot_id: i32,
    pub user_id: i32,
    pub vehicle_number: String,

    /// Half-open window: occupies `[start_time, end_time)`
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub duration_hours: f64,

    /// Price snapshot in minor currency units
    pub hourly_rate: i64,
    pub total_price: i64,

    /// Booking status: active, completed, cancelled
    pub status: String,
    pub cancelled: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_slot::Entity",
        from = "Column::SlotId",
        to = "super::parking_slot::Column::Id"
    )]
    ParkingSlot,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::parking_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSlot.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
