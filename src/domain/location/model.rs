//! Location hierarchy entities
//!
//! Ownership is unidirectional: a location owns lots by id, a lot owns
//! levels by id, a level owns slots by id. There are no back-pointers;
//! traversal goes through repository queries.

use chrono::{DateTime, Utc};

/// Geographic location (e.g. Mall, Airport, Hospital)
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: None,
            description: None,
            created_at: Utc::now(),
        }
    }
}

/// Parking lot within a location
#[derive(Debug, Clone)]
pub struct ParkingLot {
    pub id: i32,
    pub location_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ParkingLot {
    pub fn new(id: i32, location_id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            location_id,
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }
}

/// Level within a parking lot ("A", "B", ...), laid out as a rows × columns grid
#[derive(Debug, Clone)]
pub struct ParkingLevel {
    pub id: i32,
    pub lot_id: i32,
    pub level_name: String,
    /// Sort order within the lot
    pub level_order: i32,
    pub rows: i32,
    pub columns: i32,
    pub created_at: DateTime<Utc>,
}

impl ParkingLevel {
    pub fn new(
        id: i32,
        lot_id: i32,
        level_name: impl Into<String>,
        level_order: i32,
        rows: i32,
        columns: i32,
    ) -> Self {
        Self {
            id,
            lot_id,
            level_name: level_name.into(),
            level_order,
            rows,
            columns,
            created_at: Utc::now(),
        }
    }

    /// Grid capacity
    pub fn capacity(&self) -> i32 {
        self.rows * self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_capacity_is_grid_size() {
        let level = ParkingLevel::new(1, 1, "A", 0, 6, 5);
        assert_eq!(level.capacity(), 30);
    }
}
