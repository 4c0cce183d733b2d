//! Common API DTOs and helpers

mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope.
///
/// Every REST endpoint wraps its payload in this shape.
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "reason"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Status code for a domain error.
///
/// Every variant except `Storage` is an expected user-facing outcome.
pub fn error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidInterval(_)
        | DomainError::PastStartTime
        | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::SlotUnavailable { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Pagination query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (1–100). Default: 50
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

/// Paginated response with the page slice and page metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total item count across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_maps_conflict() {
        assert_eq!(
            error_status(&DomainError::SlotUnavailable { slot_id: 1 }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn error_status_maps_user_errors_to_4xx() {
        assert_eq!(
            error_status(&DomainError::PastStartTime),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::Unauthorized("nope".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_status(&DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: "1".into()
            }),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn error_status_maps_storage_to_500() {
        assert_eq!(
            error_status(&DomainError::Storage("db gone".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn paginated_response_computes_pages() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);
    }
}
