use crate::TeamAppData;
use axum::Router;
use axum::routing::get;

pub fn health_routes() -> Router<TeamAppData> {
    Router::new().route("/health", get(super::health_action))
}
