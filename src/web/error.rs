use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ActivityError;

pub fn status_for(err: &ActivityError) -> StatusCode {
    match err {
        ActivityError::NotFound => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp { .. }
        | ActivityError::NotRegistered { .. }
        | ActivityError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
