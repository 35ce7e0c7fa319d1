mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pdp_core::StoreContext;
use pdp_storefront::StorefrontClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pdp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let storefront = StorefrontClient::from_config(&config)?;
    let context = StoreContext::new(
        storefront.store_origin(),
        config.country.clone(),
        config.language.clone(),
    );
    tracing::info!(
        env = %config.env,
        endpoint = storefront.endpoint(),
        country = %context.country,
        language = %context.language,
        "storefront client ready"
    );

    let app = build_app(AppState {
        storefront: Arc::new(storefront),
        context,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
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
