//! Axum route handlers for the intake page and its JSON mirror.

use axum::{
    extract::State,
    response::Html,
    Form, Json,
};

use crate::errors::AppError;
use crate::intake::view::{submit, IntakeView, SubmitOutcome};
use crate::models::intake::IntakeInput;
use crate::state::AppState;

async fn render_current(state: &AppState) -> Result<Html<String>, AppError> {
    let view = state.view.read().await;
    Ok(Html(state.renderer.render(&view)?))
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_current(&state).await
}

/// POST /
///
/// Form-encoded submit. Validation and generation failures are shown on the
/// page, so this only errors if the page itself cannot be rendered.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(input): Form<IntakeInput>,
) -> Result<Html<String>, AppError> {
    submit(&state.view, state.generator.as_ref(), input).await;
    render_current(&state).await
}

/// GET /api/intake
pub async fn handle_get_view(State(state): State<AppState>) -> Json<IntakeView> {
    Json(state.view.read().await.clone())
}

/// POST /api/intake
///
/// Returns the view after the submit. A superseded submit still returns the
/// (newer) current view.
pub async fn handle_json_submit(
    State(state): State<AppState>,
    Json(input): Json<IntakeInput>,
) -> Result<Json<IntakeView>, AppError> {
    match submit(&state.view, state.generator.as_ref(), input).await {
        SubmitOutcome::Rejected(message) => Err(AppError::Validation(message)),
        SubmitOutcome::Failed(e) => Err(AppError::Generation(e)),
        SubmitOutcome::Completed | SubmitOutcome::Superseded => {
            Ok(Json(state.view.read().await.clone()))
        }
    }
}
