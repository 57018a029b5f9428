use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ActivityError;
use crate::models::ParticipantEmail;
use crate::services::activities_service::{self, SignupReceipt};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct RosterCommandQuery {
    pub email: ParticipantEmail,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterCommandQuery>,
    State(state): State<AppState>,
) -> Result<Json<SignupReceipt>, ActivityError> {
    activities_service::signup(&state.store, &activity_name, query.email, state.capacity).map(Json)
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterCommandQuery>,
    State(state): State<AppState>,
) -> Result<Json<SignupReceipt>, ActivityError> {
    activities_service::unregister(&state.store, &activity_name, query.email).map(Json)
}
