//! User domain entity
//!
//! Authentication lives outside this service; callers supply a user id they
//! have already verified. The entity keeps only what booking flows need.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Admins may cancel any booking and browse the full booking list
    pub is_admin: bool,
    /// Lifetime number of successful bookings (feature for external models)
    pub booking_count: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i32, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            is_admin: false,
            booking_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Whether this user may cancel the given booking owner's reservation.
    pub fn may_cancel_for(&self, owner_id: i32) -> bool {
        self.is_admin || self.id == owner_id
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_cancel_own_booking() {
        let u = User::new(1, "a@example.com", "A");
        assert!(u.may_cancel_for(1));
        assert!(!u.may_cancel_for(2));
    }

    #[test]
    fn admin_may_cancel_any_booking() {
        let mut u = User::new(1, "admin@example.com", "Admin");
        u.is_admin = true;
        assert!(u.may_cancel_for(999));
    }
}
