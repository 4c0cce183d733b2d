//! Booking history entity (append-only analytics feed)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub timestamp: DateTimeUtc,

    /// Slot number in string form, decoupled from slot row ids
    pub slot_id: String,
    pub user_id: String,

    pub occupied: bool,
    pub cancelled: bool,

    pub duration_hours: f64,
    pub lead_time_hours: f64,

    /// Hour of day (0-23)
    pub hour: i32,
    /// Day of week (0 = Monday)
    pub day_of_week: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
