pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CapacityPolicy;
use crate::database::ActivityStore;
use routes::{activities, activity};

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(store: ActivityStore, capacity: CapacityPolicy) -> Self {
        Self {
            store: Arc::new(store),
            capacity,
        }
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activity::activity_unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
