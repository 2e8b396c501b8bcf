use crate::auth;
use crate::errors::AppError;
use crate::history;
use crate::models::{
    ActivityRecord, DashboardResponse, Filter, HistoryQuery, LoginRequest, LoginResponse, NewEntry,
};
use crate::state::AppState;
use crate::storage::day_key;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index() -> Html<String> {
    Html(render_index(&day_key(Local::now())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let created = auth::login(&state.credential_path, &payload.password).await?;
    Ok(Json(LoginResponse { created }))
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let date = day_key(Local::now());
    let store = state.store.lock().await;
    let today = store.get_by_key(&date).cloned();
    let snapshot = store.all();

    Ok(Json(DashboardResponse {
        date,
        today,
        history: history::project(&snapshot, Filter::All),
    }))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(entry): Json<NewEntry>,
) -> Result<Json<ActivityRecord>, AppError> {
    entry.validate()?;

    let mut store = state.store.lock().await;
    let record = store.upsert(entry).await?;
    Ok(Json(record))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ActivityRecord>>, AppError> {
    let store = state.store.lock().await;
    let snapshot = store.all();
    Ok(Json(history::project(&snapshot, query.filter)))
}
