use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use souk_core::models::SearchFilters;
use souk_core::traits::ListingSource;

use crate::dto::{
    CategoriesResponse, ErrorResponse, HealthResponse, ListingResponse, SearchListingsQuery,
    SearchResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/v1/listings", get(search_listings))
        .route("/v1/listings/{id}", get(get_listing))
        .route("/v1/categories", get(list_categories));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/listings",
    params(SearchListingsQuery),
    responses(
        (status = 200, description = "Matching listings", body = SearchResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
    ),
    tag = "listings"
)]
pub async fn search_listings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchListingsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = SearchFilters::from(query);
    let listings = state.catalog.search(&filters).await?;
    let total = listings.len();

    let response = SearchResponse {
        listings: listings.into_iter().map(ListingResponse::from).collect(),
        total,
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing details", body = ListingResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "listings"
)]
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let listing = state.catalog.get(id).await?;

    match listing {
        Some(listing) => Ok(axum::Json(ListingResponse::from(listing)).into_response()),
        None => {
            let body = ErrorResponse {
                error: "not_found".to_string(),
                message: format!("Listing not found: {id}"),
            };
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/categories",
    responses(
        (status = 200, description = "Distinct listing categories", body = CategoriesResponse),
    ),
    tag = "listings"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.catalog.categories().await?;
    Ok(axum::Json(CategoriesResponse { categories }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        listings: state.catalog.len(),
    };

    (StatusCode::OK, axum::Json(response))
}
