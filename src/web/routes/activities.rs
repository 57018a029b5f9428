use axum::{extract::State, Json};

use crate::models::ActivitiesSnapshot;
use crate::services::activities_service;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivitiesSnapshot> {
    Json(activities_service::list_activities(&state.store))
}
