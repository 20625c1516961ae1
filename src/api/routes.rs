//! API route configuration.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::state::AppState;
use crate::db::Database;

/// Path of the single GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Create the API router.
///
/// `GET /graphql` serves GraphiQL to browsers when enabled on the state;
/// any other GET executes the query passed in the query string.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            GRAPHQL_PATH,
            get(handlers::graphql_get::<D>).post(handlers::graphql::<D>),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
