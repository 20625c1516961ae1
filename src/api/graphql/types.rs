//! GraphQL object and enum types.
//!
//! Objects wrap the storage models and are generic over the database so the
//! relationship fields (`Project.client`, `Client.projects`) can resolve
//! lazily against the same backend as the root fields.

use std::marker::PhantomData;
use std::sync::Arc;

use async_graphql::{Context, Enum, ErrorExtensions, ID, Object, Result};

use crate::db::{
    Client, ClientRepository, Database, DbError, OptionalExt, Project, ProjectRepository,
    ProjectStatus,
};

impl ErrorExtensions for DbError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Fetch the database handle registered on the schema.
pub(crate) fn database<'a, D: Database + 'static>(ctx: &Context<'a>) -> Result<&'a Arc<D>> {
    ctx.data::<Arc<D>>()
}

/// Project status as accepted in arguments.
///
/// The GraphQL item names differ from the stored values: `new` is stored as
/// `Not Started`, `progress` as `In Progress`, `completed` as `Completed`.
#[derive(Enum, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[graphql(name = "ProjectStatus")]
pub enum ProjectStatusArg {
    #[default]
    #[graphql(name = "new")]
    New,
    #[graphql(name = "progress")]
    Progress,
    #[graphql(name = "completed")]
    Completed,
}

impl From<ProjectStatusArg> for ProjectStatus {
    fn from(arg: ProjectStatusArg) -> Self {
        match arg {
            ProjectStatusArg::New => ProjectStatus::NotStarted,
            ProjectStatusArg::Progress => ProjectStatus::InProgress,
            ProjectStatusArg::Completed => ProjectStatus::Completed,
        }
    }
}

pub struct ClientObject<D> {
    client: Client,
    _db: PhantomData<fn() -> D>,
}

impl<D> From<Client> for ClientObject<D> {
    fn from(client: Client) -> Self {
        Self {
            client,
            _db: PhantomData,
        }
    }
}

#[Object(name = "Client")]
impl<D: Database + 'static> ClientObject<D> {
    async fn id(&self) -> ID {
        ID(self.client.id.clone())
    }

    async fn name(&self) -> &str {
        &self.client.name
    }

    async fn email(&self) -> &str {
        &self.client.email
    }

    async fn phone(&self) -> &str {
        &self.client.phone
    }

    /// Projects owned by this client, oldest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject<D>>> {
        let db = database::<D>(ctx)?;
        let projects = db
            .projects()
            .list_by_client(&self.client.id)
            .await
            .map_err(|e| e.extend())?;
        Ok(projects.into_iter().map(ProjectObject::from).collect())
    }
}

pub struct ProjectObject<D> {
    project: Project,
    _db: PhantomData<fn() -> D>,
}

impl<D> From<Project> for ProjectObject<D> {
    fn from(project: Project) -> Self {
        Self {
            project,
            _db: PhantomData,
        }
    }
}

#[Object(name = "Project")]
impl<D: Database + 'static> ProjectObject<D> {
    async fn id(&self) -> ID {
        ID(self.project.id.clone())
    }

    async fn name(&self) -> &str {
        &self.project.name
    }

    async fn description(&self) -> &str {
        &self.project.description
    }

    /// One of `Not Started`, `In Progress`, `Completed`.
    async fn status(&self) -> &'static str {
        self.project.status.as_str()
    }

    async fn client_id(&self) -> ID {
        ID(self.project.client_id.clone())
    }

    /// Owning client, or null when the referenced client does not exist.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<ClientObject<D>>> {
        let db = database::<D>(ctx)?;
        let client = db
            .clients()
            .get(&self.project.client_id)
            .await
            .optional()
            .map_err(|e| e.extend())?;
        Ok(client.map(ClientObject::from))
    }
}
