use crate::classify::{catalog, CategoryCatalog};
use crate::config::API_KEY_VAR;
use crate::errors::{AppError, GlucoseError};
use crate::insight::request_insight as run_insight;
use crate::insight_task::InsightStatus;
use crate::models::{
    AddReadingForm, AddReadingRequest, Reading, RemoveResponse, SummaryResponse, MAX_INPUT_VALUE,
};
use crate::state::AppState;
use crate::summary::build_summary;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let count = state.repo.lock().await.len();
    Html(render_index(count, state.generator.is_some()))
}

pub async fn get_readings(State(state): State<AppState>) -> Json<SummaryResponse> {
    let repo = state.repo.lock().await;
    Json(build_summary(&repo))
}

pub async fn add_reading(
    State(state): State<AppState>,
    Json(payload): Json<AddReadingRequest>,
) -> Result<(StatusCode, Json<Reading>), AppError> {
    let value = check_input_limit(payload.value)?;
    let reading = state
        .repo
        .lock()
        .await
        .add(value, payload.context, Utc::now())
        .await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

pub async fn add_reading_form(
    State(state): State<AppState>,
    Form(form): Form<AddReadingForm>,
) -> Result<Redirect, AppError> {
    let value = form
        .value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::bad_request(format!("'{}' is not a number", form.value)))?;
    let value = check_input_limit(value)?;
    state
        .repo
        .lock()
        .await
        .add(value, form.context, Utc::now())
        .await?;
    Ok(Redirect::to("/"))
}

fn check_input_limit(value: f64) -> Result<f64, AppError> {
    if value > MAX_INPUT_VALUE {
        return Err(AppError::bad_request(format!(
            "glucose value {value} is above the {MAX_INPUT_VALUE} mg/dL limit"
        )));
    }
    Ok(value)
}

pub async fn delete_reading(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let removed = state.repo.lock().await.remove(&id).await?;
    Ok(Json(RemoveResponse { removed }))
}

pub async fn clear_readings(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.repo.lock().await.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_categories() -> Json<CategoryCatalog> {
    Json(catalog())
}

pub async fn get_insight(State(state): State<AppState>) -> Json<InsightStatus> {
    Json(state.insight.status().await)
}

/// Starts an insight request in the background. Nothing happens when there
/// are no readings; a second request while one is pending is refused.
pub async fn request_insight(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<InsightStatus>), AppError> {
    let readings = state.repo.lock().await.all().to_vec();
    if readings.is_empty() {
        return Ok((StatusCode::OK, Json(state.insight.status().await)));
    }

    let generator = state
        .generator
        .clone()
        .ok_or(GlucoseError::MissingCredential(API_KEY_VAR))?;

    if !state.insight.try_begin().await {
        return Err(AppError::conflict("an insight request is already pending"));
    }

    let tracker = state.insight.clone();
    tokio::spawn(async move {
        let result = run_insight(generator.as_ref(), &readings).await;
        if result.is_ok() {
            info!("insight ready");
        }
        tracker.settle(result).await;
    });

    Ok((StatusCode::ACCEPTED, Json(InsightStatus::Pending)))
}

pub async fn dismiss_insight(State(state): State<AppState>) -> Json<InsightStatus> {
    Json(state.insight.dismiss().await)
}
