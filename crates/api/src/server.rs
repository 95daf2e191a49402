//! HTTP server bootstrap.

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ApiConfig;

/// Outcome of [`serve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// Test mode: no socket was opened.
    SkippedBind,
    /// The listener ran and shut down gracefully.
    Stopped,
}

/// Serve `app` according to `config`.
///
/// Under `Environment::Testing` the bind step is skipped and this returns
/// immediately; callers drive the router in-process instead.
pub async fn serve(config: &ApiConfig, app: Router) -> anyhow::Result<ServeOutcome> {
    if config.environment.is_testing() {
        tracing::info!(
            environment = config.environment.as_str(),
            "test mode: skipping bind, router is served in-process"
        );
        return Ok(ServeOutcome::SkippedBind);
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    serve_on(listener, app).await?;
    Ok(ServeOutcome::Stopped)
}

/// Serve `app` on an already bound listener until ctrl-c.
pub async fn serve_on(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
