use crate::TeamAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<TeamAppData> {
    Router::new().route("/api/teams/generate", post(super::team_generate_action))
}
