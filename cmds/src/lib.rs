//! Shared setup of the operational binaries.

use sea_orm::{ConnectOptions, Database, DbConn};
use std::{env, process::ExitCode};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

pub async fn connect() -> anyhow::Result<DbConn> {
    let url = env::var("DATABASE_URL")?;
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Ok(Database::connect(opts).await?)
}

pub fn exit(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
