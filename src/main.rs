//!
//! ParkHub reservation service.
//! Reads configuration from TOML file (~/.config/parkhub/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use parkhub::application::{BookingService, OccupancyService, PricingEngine};
use parkhub::config::AppConfig;
use parkhub::domain::location::{LevelRepository, LocationRepository, LotRepository};
use parkhub::domain::{
    Location, ParkingLevel, ParkingLot, ParkingSlot, RepositoryProvider, SlotRepository, User,
    UserRepository,
};
use parkhub::infrastructure::database::migrator::Migrator;
use parkhub::infrastructure::InMemoryRepositories;
use parkhub::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PARKHUB_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting ParkHub reservation service...");

    // ── Repositories ───────────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = if app_cfg.database.is_memory() {
        info!("Using in-memory storage (nothing persists across restarts)");
        Arc::new(InMemoryRepositories::new())
    } else {
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        info!("Database: {}", db_config.url);

        let db = match init_database(&db_config).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(e.into());
            }
        };

        info!("Running database migrations...");
        if let Err(e) = Migrator::up(&db, None).await {
            error!("Failed to run migrations: {}", e);
            return Err(e.into());
        }
        info!("Migrations completed");

        Arc::new(parkhub::SeaOrmRepositoryProvider::new(db))
    };

    // Seed demo hierarchy and default users on first start
    seed_if_empty(&repos).await;

    // ── Services ───────────────────────────────────────────────
    let booking_service = Arc::new(BookingService::new(repos.clone()));
    let occupancy_service = Arc::new(OccupancyService::new(repos.clone()));
    let pricing_engine = Arc::new(
        PricingEngine::new(app_cfg.pricing.base_price)
            .with_surge(app_cfg.pricing.surge_threshold, app_cfg.pricing.max_multiplier),
    );

    // ── REST API server with graceful shutdown ─────────────────
    let router = create_api_router(repos, booking_service, occupancy_service, pricing_engine);

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("ParkHub reservation service shutdown complete");
    Ok(())
}

/// Seed a demo location hierarchy and default users if the store is empty.
///
/// Bookings are never seeded here: they only come into existence through the
/// booking engine.
async fn seed_if_empty(repos: &Arc<dyn RepositoryProvider>) {
    match repos.users().find_by_id(1).await {
        Ok(Some(_)) => return,
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check for seed data: {}", e);
            return;
        }
    }

    info!("Empty store, seeding demo data...");

    let mut admin = User::new(1, "admin@parking.com", "Admin User");
    admin.is_admin = true;
    let demo = User::new(2, "user@parking.com", "John Doe");

    let location = Location {
        address: Some("1 Terminal Road".to_string()),
        description: Some("Multi-level airport parking".to_string()),
        ..Location::new(1, "Airport")
    };
    let lot = ParkingLot {
        description: Some("Short-stay parking next to departures".to_string()),
        ..ParkingLot::new(1, 1, "Terminal Lot")
    };

    let result: Result<(), parkhub::domain::DomainError> = async {
        repos.users().save(admin).await?;
        repos.users().save(demo).await?;
        repos.locations().save(location).await?;
        repos.lots().save(lot).await?;

        // Two levels of 6x5 slots: A_1..A_30, B_1..B_30
        let mut slot_id = 1;
        for (level_id, level_name) in [(1, "A"), (2, "B")] {
            let level = ParkingLevel::new(level_id, 1, level_name, level_id - 1, 6, 5);
            repos.levels().save(level).await?;

            for i in 0..30 {
                let slot = ParkingSlot::new(
                    slot_id,
                    level_id,
                    format!("{}_{}", level_name, i + 1),
                    i / 5,
                    i % 5,
                );
                repos.slots().save(slot).await?;
                slot_id += 1;
            }
        }
        Ok(())
    }
    .await;

    match result {
        Ok(()) => info!("Seeded 1 location, 1 lot, 2 levels, 60 slots, 2 users"),
        Err(e) => error!("Failed to seed demo data: {}", e),
    }
}
