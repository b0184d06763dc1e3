use crate::TeamAppData;
use axum::Router;
use axum::routing::get;

pub fn history_routes() -> Router<TeamAppData> {
    Router::new()
        .route("/api/history", get(super::history_list_action))
        .route("/api/history/last", get(super::history_last_action))
        .route(
            "/api/history/similar/{team_hash}",
            get(super::history_similar_action),
        )
}
