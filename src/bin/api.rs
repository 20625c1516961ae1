//! Project tracker API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use project_tracker::api::{self, ApiError, Config, Environment};
use project_tracker::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(pt::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(pt::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "pt-api")]
#[command(author, version, about = "Client and project tracker GraphQL server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://project-tracker.db")]
    database_url: String,

    /// Deployment environment (GraphiQL is served in development only)
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Production)]
    environment: Environment,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", api::graphql::sdl::<SqliteDatabase>());
        return Ok(());
    }

    api::init_tracing();

    info!(url = %cli.database_url, "Opening database");
    let db = SqliteDatabase::open(&cli.database_url).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    let config = Config::default()
        .with_host(cli.host)
        .with_port(cli.port)
        .with_environment(cli.environment);

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
