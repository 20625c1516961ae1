//! HTTP request handlers.

mod graphql;
mod system;

pub use graphql::*;
pub use system::*;
