use std::path::PathBuf;

use axum::{extract::MatchedPath, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::configuration::Settings;
use crate::routes::{check_health, home};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub static_directory: PathBuf,
}

pub fn get_app_state(configuration: &Settings) -> AppState {
    AppState {
        app_name: configuration.application.name.clone(),
        static_directory: configuration.application.static_directory.clone(),
    }
}

pub async fn run(listener: TcpListener, app_state: AppState) -> anyhow::Result<()> {
    let app = router(app_state);

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(app_state: AppState) -> Router {
    let static_assets = ServeDir::new(&app_state.static_directory);

    Router::new()
        .route("/", get(home))
        .nest_service("/static", static_assets)
        .with_state(app_state)
        .route("/health_check", get(check_health))
        .layer(
            // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::info_span!(
                    "Starting HTTP request",
                    method = ?request.method(),
                    path,
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
        .layer(CompressionLayer::new())
}
