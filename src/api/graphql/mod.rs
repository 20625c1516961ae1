//! GraphQL API over clients and projects.
//!
//! ## Example
//!
//! ```graphql
//! mutation { addClient(name: "Ann", email: "ann@x.com", phone: "555-1") { id } }
//!
//! { project(id: "...") { name status client { name } } }
//! ```

mod mutation;
mod query;
mod schema;
mod types;


pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{AppSchema, build_schema, sdl};
pub use types::{ClientObject, ProjectObject, ProjectStatusArg};
