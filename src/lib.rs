//! # ParkHub Reservation Service
//!
//! Web service for reserving parking slots across a location → lot → level →
//! slot hierarchy.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the half-open booking window, and
//!   repository traits
//! - **application**: Business logic: the availability & booking engine,
//!   occupancy-based pricing, derived occupancy views
//! - **infrastructure**: External concerns (SeaORM database, migrations,
//!   in-memory storage for development and tests)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
