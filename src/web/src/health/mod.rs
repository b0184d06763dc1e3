mod routes;

pub use routes::health_routes;

use crate::TeamAppData;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub players: usize,
}

pub async fn health_action(State(state): State<TeamAppData>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.clone(),
        players: state.recommender.pool().len(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, app_data, get, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_reports_pool_size() {
        let dir = tempfile::tempdir().unwrap();

        let (status, body) = send(app(app_data(&dir)), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["players"], 35);
    }
}
