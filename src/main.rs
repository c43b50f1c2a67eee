use axum::{http::StatusCode, routing::get, Router};
use azure_sas_upload::{bootstrap, config::Config, uploader::BlobUploader};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "azure_sas_upload=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(container_url = %config.storage.container_url(), "configuration loaded");

    // Storage and listener are independent; the listener only starts once the
    // startup upload went through.
    let uploader = BlobUploader::from_endpoint(&config.storage)?;
    bootstrap::upload_greeting(&uploader).await?;

    let app = Router::new().route("/", get(|| async { StatusCode::OK }));

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
