mod routes;

pub use routes::history_routes;

use crate::{ApiError, ApiResult, TeamAppData};
use axum::Json;
use axum::extract::{Path, Query, State};
use database::HistoryEntry;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<String>,
}

pub async fn history_list_action(
    State(state): State<TeamAppData>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let history = state.history.clone();

    let entries =
        tokio::task::spawn_blocking(move || history.history(query.user_id.as_deref())).await?;

    Ok(Json(entries))
}

pub async fn history_last_action(
    State(state): State<TeamAppData>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<HistoryEntry>> {
    let user_id = query
        .user_id
        .filter(|user_id| !user_id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id is required".to_string()))?;

    let history = state.history.clone();
    let lookup = user_id.clone();

    tokio::task::spawn_blocking(move || history.last_team(&lookup))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No team history for user {}", user_id)))
}

pub async fn history_similar_action(
    State(state): State<TeamAppData>,
    Path(team_hash): Path<String>,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let history = state.history.clone();

    let entries = tokio::task::spawn_blocking(move || history.similar_teams(&team_hash)).await?;

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, app_data, get, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_history_filters_by_user() {
        let dir = tempfile::tempdir().unwrap();
        let data = app_data(&dir);
        data.history
            .add("coach", &json!({"n": 1}), &json!({"team": 1}))
            .unwrap();
        data.history
            .add("scout", &json!({"n": 2}), &json!({"team": 2}))
            .unwrap();

        let router = app(data);

        let (status, body) = send(router.clone(), get("/api/history?user_id=coach")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (_, body) = send(router, get("/api/history")).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_last_team_and_missing_user() {
        let dir = tempfile::tempdir().unwrap();
        let data = app_data(&dir);
        data.history
            .add("coach", &json!({"n": 1}), &json!({"team": 1}))
            .unwrap();
        data.history
            .add("coach", &json!({"n": 2}), &json!({"team": 2}))
            .unwrap();

        let router = app(data);

        let (status, body) = send(router.clone(), get("/api/history/last?user_id=coach")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"]["team"], 2);

        let (status, _) = send(router.clone(), get("/api/history/last?user_id=nobody")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(router, get("/api/history/last")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_similar_teams_by_hash() {
        let dir = tempfile::tempdir().unwrap();
        let data = app_data(&dir);
        let entry = data
            .history
            .add("coach", &json!({"n": 1}), &json!({"team": 1}))
            .unwrap();
        data.history
            .add("scout", &json!({"n": 2}), &json!({"team": 1}))
            .unwrap();

        let uri = format!("/api/history/similar/{}", entry.team_hash);
        let (status, body) = send(app(data), get(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
