//! Application state for the API server.

use std::sync::Arc;

use super::graphql::{AppSchema, build_schema};
use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so the server can run on any storage backend.
/// The schema is built once here and never mutated afterwards.
pub struct AppState<D: Database + 'static> {
    schema: AppSchema<D>,
    graphiql: bool,
}

// Manual Clone impl - the schema handle is cloneable, D need not be
impl<D: Database + 'static> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            graphiql: self.graphiql,
        }
    }
}

impl<D: Database + 'static> AppState<D> {
    /// Create the state, building the schema around the given database.
    pub fn new(db: D, graphiql: bool) -> Self {
        Self {
            schema: build_schema(Arc::new(db)),
            graphiql,
        }
    }

    /// Get a reference to the GraphQL schema.
    pub fn schema(&self) -> &AppSchema<D> {
        &self.schema
    }

    /// Whether `GET /graphql` serves the GraphiQL explorer.
    pub fn graphiql_enabled(&self) -> bool {
        self.graphiql
    }
}
