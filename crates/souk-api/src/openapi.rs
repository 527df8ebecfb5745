use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "souk API",
        version = "0.1.0",
        description = "Classifieds marketplace search API serving mock listings."
    ),
    paths(
        crate::routes::search_listings,
        crate::routes::get_listing,
        crate::routes::list_categories,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::ListingResponse,
        crate::dto::SearchResponse,
        crate::dto::CategoriesResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "listings", description = "Marketplace search and listing details"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
