use crate::chart::SvgDoughnut;
use crate::controller::{Analyzed, RequestController, SubmitError};
use crate::errors::AppError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, AspectView, SessionResponse};
use crate::page::Page;
use crate::predict::Predictor;
use crate::state::AppState;
use crate::ui::{IndexView, render_index};
use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut workspace = state.controller.workspace().await;
    let effects = workspace.view.take_effects();
    let view = IndexView {
        page: &workspace.view,
        chart: workspace.renderer.chart().backend().markup(),
        effects: &effects,
        started_at: workspace.counter.started_at().format("%H:%M:%S").to_string(),
    };
    Html(render_index(&view))
}

pub async fn analyze_form(
    State(state): State<AppState>,
    Form(payload): Form<AnalyzeRequest>,
) -> Redirect {
    // Failures are already queued on the page as an alert.
    let _ = submit_draft(&state.controller, payload.text).await;
    Redirect::to("/")
}

/// Submit a form draft. The draft stays on the page unless the submission
/// was ignored because another one is in flight.
async fn submit_draft<P: Predictor>(
    controller: &Arc<RequestController<P, Page, SvgDoughnut>>,
    text: String,
) -> Result<Analyzed, SubmitError> {
    let outcome = controller.submit(&text).await;
    if !matches!(outcome, Err(SubmitError::Busy)) {
        controller.workspace().await.view.draft = text;
    }
    outcome
}

pub async fn analyze_api(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analyzed = state.controller.submit(&payload.text).await?;
    let sentiment = &analyzed.result.sentiment;

    Ok(Json(AnalyzeResponse {
        sentiment: sentiment.to_string(),
        icon: sentiment.icon().to_string(),
        badge_class: sentiment.css_class(),
        aspects: analyzed
            .result
            .aspects
            .iter()
            .filter(|(_, aspect)| aspect.is_mentioned())
            .map(|(name, aspect)| AspectView {
                name: name.clone(),
                sentiment: aspect.to_string(),
            })
            .collect(),
        counts: analyzed.counts,
        total_analyses: analyzed.total_analyses,
    }))
}

pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    let workspace = state.controller.workspace().await;
    Json(SessionResponse {
        total_analyses: workspace.counter.total(),
        started_at: workspace.counter.started_at().to_rfc3339(),
        phase: workspace.phase().as_str().to_string(),
    })
}
