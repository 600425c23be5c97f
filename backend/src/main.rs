//! Backend entry point: configuration, migrations, pool, and HTTP wiring.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use enrollment_backend::ApiDoc;
use enrollment_backend::domain::EnrollmentService;
use enrollment_backend::inbound::http::{self, health, HttpState};
use enrollment_backend::outbound::persistence::{
    seed, DbPool, DieselEnrollmentRepository, PoolConfig,
};
use enrollment_backend::Trace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Command line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "enrollment-backend", about = "Course enrollment service")]
struct Cli {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Address and port the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
    pool_size: u32,

    /// Seed the demo semester, students, and courses on startup.
    #[arg(long, env = "SEED_DEMO_DATA", default_value_t = false)]
    seed_demo_data: bool,
}

/// Run pending migrations on a blocking thread before serving traffic.
async fn run_migrations(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        use diesel::Connection;

        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url)
            .map_err(|err| std::io::Error::other(format!("connect for migrations: {err}")))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| std::io::Error::other(format!("run migrations: {err}")))
    })
    .await
    .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    run_migrations(&cli.database_url).await?;

    let pool = DbPool::new(PoolConfig::new(&cli.database_url).with_max_size(cli.pool_size))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    if cli.seed_demo_data {
        seed::seed_demo_data(&pool)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }

    let repository = Arc::new(DieselEnrollmentRepository::new(pool));
    let service = Arc::new(EnrollmentService::new(repository));
    let state = web::Data::new(HttpState::new(service.clone(), service));

    let health_state = web::Data::new(health::HealthState::new());
    // Clone for the server factory so the probes see the same state.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .configure(http::configure)
            .service(health::ready)
            .service(health::live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(cli.bind_addr.as_str())?;

    health_state.mark_ready();
    info!(addr = %cli.bind_addr, "enrollment backend listening");
    server.run().await
}
