//! SQLite ProjectRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, instrument};

use crate::db::utils::generate_entity_id;
use crate::db::{DbError, DbResult, NewProject, Project, ProjectPatch, ProjectRepository};

const PROJECT_COLUMNS: &str = "id, name, description, status, client_id";

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn project_from_row(row: &SqliteRow) -> DbResult<Project> {
    let status: String = row.try_get("status")?;
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status: status.parse()?,
        client_id: row.try_get("client_id")?,
    })
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    #[instrument(skip(self))]
    async fn create(&self, project: &NewProject) -> DbResult<Project> {
        let id = generate_entity_id();

        sqlx::query(
            "INSERT INTO project (id, name, description, status, client_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(&project.client_id)
        .execute(self.pool)
        .await?;

        debug!(%id, "Project created");
        Ok(Project {
            id,
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            client_id: project.client_id.clone(),
        })
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Project> {
        let sql = format!("SELECT {} FROM project WHERE id = ?", PROJECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        project_from_row(&row)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<Project>> {
        let sql = format!("SELECT {} FROM project ORDER BY rowid", PROJECT_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;

        rows.iter().map(project_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn list_by_client(&self, client_id: &str) -> DbResult<Vec<Project>> {
        let sql = format!(
            "SELECT {} FROM project WHERE client_id = ? ORDER BY rowid",
            PROJECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(client_id)
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(project_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn update(&self, id: &str, patch: &ProjectPatch) -> DbResult<Project> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        // Keep this a single statement. SQLite will not upgrade a deferred
        // read lock to a write lock while another connection is writing.
        let sql = format!(
            "UPDATE project SET \
                name = COALESCE(?, name), \
                description = COALESCE(?, description), \
                status = COALESCE(?, status), \
                client_id = COALESCE(?, client_id) \
             WHERE id = ? RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(patch.name.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.client_id.as_deref())
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        debug!(%id, "Project updated");
        project_from_row(&row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> DbResult<Project> {
        let sql = format!("DELETE FROM project WHERE id = ? RETURNING {}", PROJECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        project_from_row(&row)
    }
}
