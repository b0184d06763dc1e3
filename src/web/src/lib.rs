mod chat;
mod error;
mod health;
mod history;
mod routes;
mod teams;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use database::HistoryStore;
use engine::{Assistant, SessionStore, TeamRecommender};
use log::{error, info, warn};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub struct TeamBuilderServer {
    data: TeamAppData,
    port: u16,
    cors_origins: Vec<String>,
}

impl TeamBuilderServer {
    pub fn new(data: TeamAppData, port: u16, cors_origins: Vec<String>) -> Self {
        TeamBuilderServer {
            data,
            port,
            cors_origins,
        }
    }

    pub fn app(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    }))
                    .layer(cors_layer(&self.cors_origins)),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", self.port);

        axum::serve(listener, self.app()).await
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

pub struct TeamAppData {
    pub recommender: Arc<TeamRecommender>,
    pub assistant: Arc<Assistant>,
    pub sessions: Arc<Mutex<SessionStore>>,
    pub history: Arc<HistoryStore>,
    pub default_budget: f64,
    pub environment: String,
}

impl Clone for TeamAppData {
    fn clone(&self) -> Self {
        TeamAppData {
            recommender: Arc::clone(&self.recommender),
            assistant: Arc::clone(&self.assistant),
            sessions: Arc::clone(&self.sessions),
            history: Arc::clone(&self.history),
            default_budget: self.default_budget,
            environment: self.environment.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use engine::{Language, PlayerAttributes, PlayerPool, PlayerRecord, PositionTag};
    use serde_json::Value;
    use tower::ServiceExt;

    fn player(id: u32, position: PositionTag, overall: f64, value: f64) -> PlayerRecord {
        PlayerRecord::builder()
            .id(id)
            .name(format!("Player {}", id))
            .best_position(position)
            .overall(overall)
            .value_eur(value)
            .nationality("Brazil")
            .attributes(PlayerAttributes::uniform(overall))
            .build()
            .expect("Failed to build test player")
    }

    pub fn app_data(dir: &tempfile::TempDir) -> TeamAppData {
        let positions = [
            PositionTag::Goalkeeper,
            PositionTag::CentreBack,
            PositionTag::RightBack,
            PositionTag::CentralMidfielder,
            PositionTag::AttackingMidfielder,
            PositionTag::Striker,
            PositionTag::LeftWinger,
        ];

        let records = (1..=35u32)
            .map(|id| {
                let position = positions[id as usize % positions.len()];
                player(id, position, 60.0 + id as f64, id as f64 * 10_000.0)
            })
            .collect();

        let pool = Arc::new(PlayerPool::from_records(records));

        TeamAppData {
            recommender: Arc::new(TeamRecommender::new(Arc::clone(&pool))),
            assistant: Arc::new(Assistant::new(pool, Language::English)),
            sessions: Arc::new(Mutex::new(SessionStore::new(chrono::Duration::minutes(30)))),
            history: Arc::new(
                HistoryStore::open(dir.path().join("history.json")).expect("history store"),
            ),
            default_budget: 100_000_000.0,
            environment: "test".to_string(),
        }
    }

    pub fn app(data: TeamAppData) -> Router {
        TeamBuilderServer::new(data, 0, vec!["http://localhost:5173".to_string()]).app()
    }

    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }
}
