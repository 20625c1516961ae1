//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module.

mod client;
mod connection;
mod project;


pub use client::SqliteClientRepository;
pub use connection::SqliteDatabase;
pub use project::SqliteProjectRepository;
