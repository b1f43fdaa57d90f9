mod api;
mod middleware;

use std::sync::Arc;

use laundro_core::{AppConfig, BranchDirectory};
use laundro_mailer::MailClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = laundro_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let directory = load_directory(&config)?;
    let mailer = build_mailer(&config)?;
    tracing::info!(
        env = %config.env,
        branches = directory.catalog.len(),
        districts = directory.catalog.districts().len(),
        mail = mailer.is_some(),
        "starting laundro-server"
    );

    let state = AppState {
        directory: Arc::new(directory),
        mailer,
    };
    let app = build_app(state, RateLimitState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn load_directory(config: &AppConfig) -> anyhow::Result<BranchDirectory> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading branch catalog from file");
            Ok(laundro_core::load_directory(path)?)
        }
        None => Ok(laundro_core::builtin_directory()),
    }
}

fn build_mailer(config: &AppConfig) -> anyhow::Result<Option<MailClient>> {
    let Some(endpoint) = config.mail_endpoint.as_deref() else {
        tracing::warn!("LAUNDRO_MAIL_ENDPOINT not set; form submissions will be rejected");
        return Ok(None);
    };

    let client = MailClient::new(
        endpoint,
        config.mail_timeout_secs,
        &config.mail_user_agent,
    )?;
    Ok(Some(client))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
