use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::startup::AppState;

#[derive(Template)]
#[template(path = "base.html")]
struct HomeTemplate<'a> {
    app_name: &'a str,
}

#[tracing::instrument(name = "Rendering the home page", skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, HomeError> {
    let page = HomeTemplate {
        app_name: &state.app_name,
    };
    let html = page.render().map_err(HomeError::RenderError)?;

    Ok(Html(html))
}

#[derive(thiserror::Error)]
pub enum HomeError {
    #[error("Failed to render the home page template")]
    RenderError(#[source] askama::Error),
}

impl std::fmt::Debug for HomeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for HomeError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HomeError::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
