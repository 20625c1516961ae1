//! Root mutation resolvers.

use std::marker::PhantomData;

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::info;

use super::types::{ClientObject, ProjectObject, ProjectStatusArg, database};
use crate::db::{
    ClientRepository, Database, NewClient, NewProject, OptionalExt, ProjectPatch,
    ProjectRepository,
};

pub struct MutationRoot<D>(PhantomData<fn() -> D>);

impl<D> Default for MutationRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object(name = "Mutation")]
impl<D: Database + 'static> MutationRoot<D> {
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<ClientObject<D>> {
        let db = database::<D>(ctx)?;
        let client = db
            .clients()
            .create(&NewClient { name, email, phone })
            .await
            .map_err(|e| e.extend())?;

        info!(id = %client.id, "Client added");
        Ok(ClientObject::from(client))
    }

    /// Delete a client and all of its projects in one transaction.
    ///
    /// Returns null when the client did not exist; projects referencing the
    /// ID are removed either way.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ClientObject<D>>> {
        let db = database::<D>(ctx)?;
        let client = db
            .clients()
            .delete(&id)
            .await
            .optional()
            .map_err(|e| e.extend())?;

        if client.is_some() {
            info!(id = %id.as_str(), "Client deleted");
        }
        Ok(client.map(ClientObject::from))
    }

    /// Create a project. The client ID is not checked for existence.
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(default)] status: ProjectStatusArg,
        client_id: ID,
    ) -> Result<ProjectObject<D>> {
        let db = database::<D>(ctx)?;
        let project = db
            .projects()
            .create(&NewProject {
                name,
                description,
                status: status.into(),
                client_id: client_id.0,
            })
            .await
            .map_err(|e| e.extend())?;

        info!(id = %project.id, "Project added");
        Ok(ProjectObject::from(project))
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ProjectObject<D>>> {
        let db = database::<D>(ctx)?;
        let project = db
            .projects()
            .delete(&id)
            .await
            .optional()
            .map_err(|e| e.extend())?;

        if project.is_some() {
            info!(id = %id.as_str(), "Project deleted");
        }
        Ok(project.map(ProjectObject::from))
    }

    /// Update the supplied fields of a project.
    ///
    /// Omitted and null arguments leave the stored value unchanged.
    /// Returns null when the project does not exist.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatusArg>,
        client_id: Option<ID>,
    ) -> Result<Option<ProjectObject<D>>> {
        let db = database::<D>(ctx)?;
        let patch = ProjectPatch {
            name,
            description,
            status: status.map(Into::into),
            client_id: client_id.map(|id| id.0),
        };

        let project = db
            .projects()
            .update(&id, &patch)
            .await
            .optional()
            .map_err(|e| e.extend())?;
        Ok(project.map(ProjectObject::from))
    }
}
