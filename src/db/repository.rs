//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! Futures are declared `Send` so generic callers (HTTP handlers, GraphQL
//! resolvers) can await them on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Client, NewClient, NewProject, Project, ProjectPatch},
};

/// Repository for Client operations.
pub trait ClientRepository: Send + Sync {
    /// Create a new client with a generated ID.
    fn create(&self, client: &NewClient) -> impl Future<Output = DbResult<Client>> + Send;

    /// Get a client by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Client>> + Send;

    /// Get all clients in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Client>>> + Send;

    /// Delete a client together with every project that references it.
    ///
    /// Both deletes run in one transaction. Projects referencing `id` are
    /// removed even when the client itself does not exist, in which case
    /// `NotFound` is returned after the commit.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<Client>> + Send;
}

/// Repository for Project operations.
pub trait ProjectRepository: Send + Sync {
    /// Create a new project with a generated ID.
    fn create(&self, project: &NewProject) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get a project by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get all projects in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Get all projects owned by a client, in insertion order.
    fn list_by_client(&self, client_id: &str)
    -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Apply a partial update and return the updated project.
    fn update(
        &self,
        id: &str,
        patch: &ProjectPatch,
    ) -> impl Future<Output = DbResult<Project>> + Send;

    /// Delete a project by ID, returning the deleted record.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<Project>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Clients<'a>: ClientRepository
    where
        Self: 'a;
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the client repository.
    fn clients(&self) -> Self::Clients<'_>;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;
}
