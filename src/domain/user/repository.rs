//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn save(&self, user: User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Bump the lifetime booking counter by one
    async fn increment_booking_count(&self, id: i32) -> DomainResult<()>;
}
