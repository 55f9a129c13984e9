#[macro_use]
extern crate tracing;

pub mod error;
mod extractors;
mod handlers;
pub mod jwt;
mod middlewares;
mod password;
pub mod recorder;
mod state;
mod utils;

use error::{Error, Result};
pub use state::*;
pub use utils::panic;

use tokio::net::TcpListener;

pub async fn run(listener: TcpListener, state: impl StateTrait) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let app = middlewares::middlewares(state.clone(), handlers::routes(state));

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await?;

    Ok(())
}
