//! The single-page form: render, collect, invoke, display.

mod form;
mod page;

pub use form::FormState;
pub use page::{Outcome, PAGE_TITLE, PageRenderer};

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use blogsmith_error::{BlogsmithError, BlogsmithErrorKind, BlogsmithResult};
use blogsmith_server::BlogInvoker;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Generation pipeline
    pub invoker: BlogInvoker,
    /// Page template
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Creates handler state around an invoker.
    pub fn new(invoker: BlogInvoker) -> BlogsmithResult<Self> {
        Ok(Self {
            invoker,
            renderer: Arc::new(PageRenderer::new()?),
        })
    }
}

/// Creates the page router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(generate))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Render the empty form with widget defaults.
#[instrument(skip(state))]
async fn show_form(State(state): State<AppState>) -> Response {
    render(&state, StatusCode::OK, &FormState::default(), &Outcome::Empty)
}

/// Collect the submitted values, run one generation and show the result.
///
/// The submitted values stay in the fields. Any failure replaces the result
/// with an error banner.
#[instrument(skip(state, form), fields(style = %form.style))]
async fn generate(State(state): State<AppState>, Form(form): Form<FormState>) -> Response {
    match submit(&state, &form).await {
        Ok(text) => render(&state, StatusCode::OK, &form, &Outcome::Generated(text)),
        Err(e) => {
            error!(error = %e, "Blog generation failed");
            render(&state, status_for(&e), &form, &Outcome::Failed(e.summary()))
        }
    }
}

async fn submit(state: &AppState, form: &FormState) -> BlogsmithResult<String> {
    let request = form.collect()?;
    let result = state.invoker.invoke(&request).await?;
    Ok(result.into_text())
}

fn status_for(err: &BlogsmithError) -> StatusCode {
    match err.kind() {
        BlogsmithErrorKind::Form(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn render(state: &AppState, status: StatusCode, form: &FormState, outcome: &Outcome) -> Response {
    match state.renderer.render(form, outcome) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => {
            error!(error = %e, "Page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.message).into_response()
        }
    }
}
