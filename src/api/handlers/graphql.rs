//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use crate::api::AppState;
use crate::api::routes::GRAPHQL_PATH;
use crate::db::Database;

/// Execute a GraphQL request from a JSON body.
#[instrument(skip(state, req))]
pub async fn graphql<D: Database + 'static>(
    State(state): State<AppState<D>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}

/// `GET /graphql`: the GraphiQL page for browsers when enabled, otherwise
/// execute the query passed in the query string.
#[instrument(skip_all)]
pub async fn graphql_get<D: Database + 'static>(
    State(state): State<AppState<D>>,
    headers: HeaderMap,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    if state.graphiql_enabled() && accepts_html(&headers) {
        return graphiql().into_response();
    }

    match req {
        Ok(req) => GraphQLResponse::from(state.schema().execute(req.into_inner()).await)
            .into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/html"))
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
