mod routes;

pub use routes::chat_routes;

use crate::{ApiError, ApiResult, TeamAppData};
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use engine::{Lineup, TeamDraft};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Lineup>,
}

#[derive(Serialize)]
struct DraftRecord<'a> {
    team_description: &'a str,
    team_formation: &'a str,
    budget: f64,
    criteria: &'a engine::Criteria,
    source: &'static str,
}

pub async fn chat_action(
    State(state): State<TeamAppData>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if request.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user_id is required".to_string()));
    }

    let reply = {
        let now = Utc::now();
        let mut sessions = state.sessions.lock();

        let evicted = sessions.evict_idle(now);
        if evicted > 0 {
            debug!("evicted {} idle conversations", evicted);
        }

        let session = sessions.session(&request.user_id, now);
        state.assistant.reply(session, &request.message)
    };

    let team = match reply.draft {
        Some(draft) => Some(generate_draft(&state, &request.user_id, draft).await?),
        None => None,
    };

    Ok(Json(ChatResponse {
        response: reply.response,
        team,
    }))
}

async fn generate_draft(state: &TeamAppData, user_id: &str, draft: TeamDraft) -> ApiResult<Lineup> {
    let recommender = state.recommender.clone();
    let history = state.history.clone();
    let budget = state.default_budget;
    let user_id = user_id.to_string();

    let lineup = tokio::task::spawn_blocking(move || {
        let lineup =
            recommender.generate_team(&draft.description, &draft.formation, &draft.criteria, budget);

        let record = DraftRecord {
            team_description: &draft.description,
            team_formation: &draft.formation,
            budget,
            criteria: &draft.criteria,
            source: "chat",
        };

        if let Err(e) = history.add(&user_id, &record, &lineup) {
            warn!("failed to record chat team for {}: {}", user_id, e);
        }

        lineup
    })
    .await?;

    Ok(lineup)
}
