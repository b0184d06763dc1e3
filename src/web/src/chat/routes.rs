use crate::TeamAppData;
use axum::Router;
use axum::routing::post;

pub fn chat_routes() -> Router<TeamAppData> {
    Router::new().route("/api/chat", post(super::chat_action))
}
