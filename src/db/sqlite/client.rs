//! SQLite ClientRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, instrument};

use crate::db::utils::generate_entity_id;
use crate::db::{Client, ClientRepository, DbError, DbResult, NewClient};

/// SQLx-backed client repository.
pub struct SqliteClientRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn client_from_row(row: &SqliteRow) -> DbResult<Client> {
    Ok(Client {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
    })
}

impl<'a> ClientRepository for SqliteClientRepository<'a> {
    #[instrument(skip(self))]
    async fn create(&self, client: &NewClient) -> DbResult<Client> {
        let id = generate_entity_id();

        sqlx::query("INSERT INTO client (id, name, email, phone) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .execute(self.pool)
            .await?;

        debug!(%id, "Client created");
        Ok(Client {
            id,
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
        })
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> DbResult<Client> {
        let row = sqlx::query("SELECT id, name, email, phone FROM client WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Client", id))?;
        client_from_row(&row)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<Client>> {
        let rows = sqlx::query("SELECT id, name, email, phone FROM client ORDER BY rowid")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(client_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> DbResult<Client> {
        let mut tx = self.pool.begin().await?;

        let removed_projects = sqlx::query("DELETE FROM project WHERE client_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let row = sqlx::query("DELETE FROM client WHERE id = ? RETURNING id, name, email, phone")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(%id, removed_projects, "Client delete committed");

        let row = row.ok_or_else(|| DbError::not_found("Client", id))?;
        client_from_row(&row)
    }
}
