//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, OccupancyService, PricingEngine};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, EmptyData, PaginatedResponse, PaginationParams};
use crate::interfaces::http::modules::bookings::{self, dto::BookingDto, BookingAppState};
use crate::interfaces::http::modules::health::handlers as health;
use crate::interfaces::http::modules::locations::{self, LocationAppState};
use crate::interfaces::http::modules::pricing::{self, PricingAppState};
use crate::interfaces::http::modules::slots::{self, SlotAppState};

/// Unified state for all API routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiUnifiedState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub bookings: Arc<BookingService>,
    pub occupancy: Arc<OccupancyService>,
    pub pricing: Arc<PricingEngine>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiUnifiedState> for BookingAppState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        BookingAppState {
            repos: Arc::clone(&s.repos),
            bookings: Arc::clone(&s.bookings),
            occupancy: Arc::clone(&s.occupancy),
            pricing: Arc::clone(&s.pricing),
        }
    }
}

impl FromRef<ApiUnifiedState> for LocationAppState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        LocationAppState {
            occupancy: Arc::clone(&s.occupancy),
        }
    }
}

impl FromRef<ApiUnifiedState> for SlotAppState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        SlotAppState {
            occupancy: Arc::clone(&s.occupancy),
        }
    }
}

impl FromRef<ApiUnifiedState> for PricingAppState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        PricingAppState {
            occupancy: Arc::clone(&s.occupancy),
            pricing: Arc::clone(&s.pricing),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Locations
        locations::handlers::list_locations,
        locations::handlers::list_lots,
        locations::handlers::list_levels,
        // Slots
        slots::handlers::level_grid,
        // Pricing
        pricing::handlers::price_quote,
        // Bookings
        bookings::handlers::create_booking,
        bookings::handlers::cancel_booking,
        bookings::handlers::get_booking,
        bookings::handlers::user_bookings,
        bookings::handlers::list_bookings,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            PaginationParams,
            PaginatedResponse<BookingDto>,
            // Health
            health::HealthStatus,
            // Locations
            locations::dto::LocationDto,
            locations::dto::LotDto,
            locations::dto::LevelDto,
            // Slots
            slots::dto::SlotDto,
            slots::dto::StatsDto,
            slots::dto::GridDto,
            // Pricing
            pricing::dto::QuoteDto,
            // Bookings
            bookings::dto::CreateBookingRequest,
            bookings::dto::CancelBookingRequest,
            bookings::dto::BookingDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Locations", description = "Location → lot → level hierarchy with availability roll-ups"),
        (name = "Slots", description = "Per-level slot grids with derived occupancy"),
        (name = "Pricing", description = "Occupancy-based dynamic pricing quotes"),
        (name = "Bookings", description = "Slot reservations: create, cancel, query"),
    ),
    info(
        title = "ParkHub Reservation API",
        version = "1.0.0",
        description = "REST API for reserving parking slots across locations, lots and levels",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    booking_service: Arc<BookingService>,
    occupancy_service: Arc<OccupancyService>,
    pricing_engine: Arc<PricingEngine>,
) -> Router {
    let state = ApiUnifiedState {
        repos,
        bookings: booking_service,
        occupancy: occupancy_service,
        pricing: pricing_engine,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // --- Hierarchy ---
        .route("/locations", get(locations::handlers::list_locations))
        .route(
            "/locations/{location_id}/lots",
            get(locations::handlers::list_lots),
        )
        .route("/lots/{lot_id}/levels", get(locations::handlers::list_levels))
        // --- Grid ---
        .route("/levels/{level_id}/grid", get(slots::handlers::level_grid))
        // --- Pricing ---
        .route("/pricing/quote", get(pricing::handlers::price_quote))
        // --- Bookings ---
        .route(
            "/bookings",
            get(bookings::handlers::list_bookings).post(bookings::handlers::create_booking),
        )
        .route("/bookings/{booking_id}", get(bookings::handlers::get_booking))
        .route(
            "/bookings/{booking_id}/cancel",
            post(bookings::handlers::cancel_booking),
        )
        .route(
            "/users/{user_id}/bookings",
            get(bookings::handlers::user_bookings),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
