//! Root query resolvers.

use std::marker::PhantomData;

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use super::types::{ClientObject, ProjectObject, database};
use crate::db::{ClientRepository, Database, OptionalExt, ProjectRepository};

/// Read-only entry points. Lookups by ID resolve to null when nothing matches.
pub struct QueryRoot<D>(PhantomData<fn() -> D>);

impl<D> Default for QueryRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object(name = "RootQueryType")]
impl<D: Database + 'static> QueryRoot<D> {
    /// All projects, oldest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject<D>>> {
        let db = database::<D>(ctx)?;
        let projects = db.projects().list().await.map_err(|e| e.extend())?;
        Ok(projects.into_iter().map(ProjectObject::from).collect())
    }

    async fn project(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ProjectObject<D>>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let db = database::<D>(ctx)?;
        let project = db
            .projects()
            .get(&id)
            .await
            .optional()
            .map_err(|e| e.extend())?;
        Ok(project.map(ProjectObject::from))
    }

    /// All clients, oldest first.
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<ClientObject<D>>> {
        let db = database::<D>(ctx)?;
        let clients = db.clients().list().await.map_err(|e| e.extend())?;
        Ok(clients.into_iter().map(ClientObject::from).collect())
    }

    async fn client(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ClientObject<D>>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let db = database::<D>(ctx)?;
        let client = db
            .clients()
            .get(&id)
            .await
            .optional()
            .map_err(|e| e.extend())?;
        Ok(client.map(ClientObject::from))
    }
}
