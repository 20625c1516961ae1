//! Schema assembly.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::db::Database;

/// The full GraphQL schema type, generic over the storage backend.
pub type AppSchema<D> = Schema<QueryRoot<D>, MutationRoot<D>, EmptySubscription>;

fn schema_builder<D: Database + 'static>()
-> SchemaBuilder<QueryRoot<D>, MutationRoot<D>, EmptySubscription> {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .extension(Tracing)
}

/// Build the schema with the database injected as context data.
///
/// Called once at start-up; the returned handle is cheap to clone and
/// shared by every request.
pub fn build_schema<D: Database + 'static>(db: Arc<D>) -> AppSchema<D> {
    schema_builder::<D>().data(db).finish()
}

/// Render the schema in SDL without a database attached.
pub fn sdl<D: Database + 'static>() -> String {
    schema_builder::<D>().finish().sdl()
}
