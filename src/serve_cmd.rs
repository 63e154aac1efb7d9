//! Serve command: expose the planner over HTTP.

use anyhow::{Context, Result};
use tracing::info;

use leave_planner::api::{AppState, create_router};

use crate::cli::ServeArgs;

/// Start the HTTP server and run until it stops.
pub fn run(args: ServeArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref())?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    runtime.block_on(async move {
        let app = create_router(AppState::new(config));

        info!(addr = %args.addr, "starting leave planner server");
        let listener = tokio::net::TcpListener::bind(args.addr)
            .await
            .with_context(|| format!("failed to bind {}", args.addr))?;
        axum::serve(listener, app).await.context("server error")?;
        Ok(())
    })
}
