//! `course-registration` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — start the API server.
//! - `migrate`  — create the course and enrollment tables.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use db::repository::{PgCourseRepository, PgRegistrationRepository};
use service::CourseService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "course-registration",
    about = "Course catalog and enrollment backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        #[arg(long, env = "MAX_CONNECTIONS", default_value_t = 10)]
        max_connections: u32,
        /// Browser origin allowed to call the API.
        #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = api::config::DEFAULT_ALLOWED_ORIGIN)]
        allowed_origin: String,
        /// Apply the schema before serving.
        #[arg(long)]
        migrate: bool,
    },
    /// Create the course and enrollment tables.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database_url, max_connections, allowed_origin, migrate } => {
            info!("Starting API server on {bind}");
            let pool = db::pool::create_pool(&database_url, max_connections)
                .await
                .context("failed to connect to database")?;

            if migrate {
                db::pool::run_migrations(&pool).await.context("migration failed")?;
            }

            let service = CourseService::new(
                Arc::new(PgCourseRepository::new(pool.clone())),
                Arc::new(PgRegistrationRepository::new(pool)),
            );
            let config = api::ServerConfig { bind_addr: bind, allowed_origin };

            api::serve(config, service).await.context("server failed")?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
