use crate::config::resolve_api_base;
use crate::errors::AppError;
use crate::models::PlanEntry;
use crate::state::AppState;
use crate::storage::fetch_plan_for_date;
use crate::ui::render_plan;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{Html, IntoResponse},
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = Local::now().date_naive();
    let entries = fetch_plan_for_date(&state.pool, today).await?;
    Ok(Html(render_plan(today, &entries)))
}

pub async fn plan_today(State(state): State<AppState>) -> Result<Json<Vec<PlanEntry>>, AppError> {
    let today = Local::now().date_naive();
    let entries = fetch_plan_for_date(&state.pool, today).await?;
    Ok(Json(entries))
}

pub async fn plan_for_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<PlanEntry>>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    let entries = fetch_plan_for_date(&state.pool, date).await?;
    Ok(Json(entries))
}

pub async fn config_js(headers: HeaderMap) -> impl IntoResponse {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let body = format!("const API_BASE = '{}';\n", resolve_api_base(host));
    ([(header::CONTENT_TYPE, "application/javascript")], body)
}
