//! Parking slot domain entity

/// A single parkable unit on a level's grid.
///
/// There is deliberately no stored occupancy flag here: whether a slot is
/// occupied at a point in time is derived from its non-cancelled bookings.
#[derive(Debug, Clone)]
pub struct ParkingSlot {
    /// Unique slot ID
    pub id: i32,
    /// Owning level
    pub level_id: i32,
    /// Slot number, e.g. "A_1"
    pub slot_number: String,
    /// Grid row (0-based)
    pub row: i32,
    /// Grid column (0-based)
    pub column: i32,
}

impl ParkingSlot {
    pub fn new(
        id: i32,
        level_id: i32,
        slot_number: impl Into<String>,
        row: i32,
        column: i32,
    ) -> Self {
        Self {
            id,
            level_id,
            slot_number: slot_number.into(),
            row,
            column,
        }
    }

    /// Grid coordinates
    pub fn coordinates(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    /// Human-readable slot name: "A_1" becomes "A-01"
    pub fn display_name(&self) -> String {
        let mut parts = self.slot_number.splitn(2, '_');
        match (parts.next(), parts.next()) {
            (Some(prefix), Some(num)) => format!("{}-{:0>2}", prefix, num),
            _ => self.slot_number.clone(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_pads_number() {
        let slot = ParkingSlot::new(1, 1, "A_1", 0, 0);
        assert_eq!(slot.display_name(), "A-01");
    }

    #[test]
    fn display_name_keeps_two_digit_number() {
        let slot = ParkingSlot::new(2, 1, "B_15", 2, 4);
        assert_eq!(slot.display_name(), "B-15");
    }

    #[test]
    fn display_name_without_separator_is_unchanged() {
        let slot = ParkingSlot::new(3, 1, "C7", 1, 1);
        assert_eq!(slot.display_name(), "C7");
    }

    #[test]
    fn coordinates_are_row_column() {
        let slot = ParkingSlot::new(4, 1, "A_2", 3, 4);
        assert_eq!(slot.coordinates(), (3, 4));
    }
}
