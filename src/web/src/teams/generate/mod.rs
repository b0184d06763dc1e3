pub mod routes;

use crate::{ApiError, ApiResult, TeamAppData};
use axum::Json;
use axum::extract::State;
use engine::{Criteria, GroupCriteria, LineGroup, Lineup};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

const DESCRIPTION_LENGTH: std::ops::RangeInclusive<usize> = 10..=500;
const DEFAULT_MIN_OVERALL: f64 = 70.0;

/// Request aliases mapped onto dataset columns.
const ATTRIBUTE_COLUMNS: &[(&str, &str)] = &[
    ("min_pace", "min_sprint_speed"),
    ("min_shooting", "min_shooting_total"),
    ("min_passing", "min_passing_total"),
    ("min_defending", "min_defending_total"),
    ("min_physical", "min_physicality_total"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupCriteriaRequest {
    pub min_overall: Option<f64>,
    pub min_pace: Option<f64>,
    pub min_shooting: Option<f64>,
    pub min_passing: Option<f64>,
    pub min_defending: Option<f64>,
    pub min_physical: Option<f64>,
}

impl GroupCriteriaRequest {
    fn values(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("min_overall", self.min_overall.or(Some(DEFAULT_MIN_OVERALL))),
            ("min_pace", self.min_pace),
            ("min_shooting", self.min_shooting),
            ("min_passing", self.min_passing),
            ("min_defending", self.min_defending),
            ("min_physical", self.min_physical),
        ]
    }

    fn to_group(&self) -> GroupCriteria {
        let mut group = GroupCriteria::new();

        for (name, value) in self.values() {
            if let Some(value) = value {
                let column = ATTRIBUTE_COLUMNS
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map_or(name, |(_, column)| *column);
                group.insert(column, value);
            }
        }

        group
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamGenerateRequest {
    pub team_description: String,
    pub team_formation: String,
    pub budget: f64,
    #[serde(default)]
    pub criteria: BTreeMap<String, GroupCriteriaRequest>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl TeamGenerateRequest {
    pub fn validate(&self) -> Result<(), String> {
        let length = self.team_description.chars().count();
        if !DESCRIPTION_LENGTH.contains(&length) {
            return Err(format!(
                "team_description must be between {} and {} characters",
                DESCRIPTION_LENGTH.start(),
                DESCRIPTION_LENGTH.end()
            ));
        }

        validate_formation(&self.team_formation)?;

        if self.budget.is_nan() || self.budget <= 0.0 {
            return Err("budget must be greater than 0".to_string());
        }

        for (group, criteria) in &self.criteria {
            let out_of_range = criteria
                .values()
                .into_iter()
                .find(|(_, value)| value.is_some_and(|value| !(0.0..=100.0).contains(&value)));

            if let Some((name, _)) = out_of_range {
                return Err(format!("{}.{} must be between 0 and 100", group, name));
            }
        }

        Ok(())
    }

    /// Groups that are not a known line are ignored.
    pub fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::new();

        for (group, request) in &self.criteria {
            match LineGroup::from_str(group) {
                Ok(line) => *criteria.group_mut(line) = request.to_group(),
                Err(_) => warn!("ignoring criteria for unknown group '{}'", group),
            }
        }

        criteria
    }
}

/// Single digits joined by '-', at least two lines, ten outfield players.
fn validate_formation(formation: &str) -> Result<(), String> {
    let segments: Vec<&str> = formation.split('-').collect();

    let well_formed = segments.len() >= 2
        && segments
            .iter()
            .all(|segment| segment.len() == 1 && segment.chars().all(|c| c.is_ascii_digit()));

    if !well_formed {
        return Err("team_formation must look like '4-3-3'".to_string());
    }

    let total: u32 = segments
        .iter()
        .filter_map(|segment| segment.parse::<u32>().ok())
        .sum();

    if total != 10 {
        return Err("team_formation must add up to 10 outfield players".to_string());
    }

    Ok(())
}

pub async fn team_generate_action(
    State(state): State<TeamAppData>,
    Json(request): Json<TeamGenerateRequest>,
) -> ApiResult<Json<Lineup>> {
    request.validate().map_err(ApiError::BadRequest)?;

    let recommender = state.recommender.clone();
    let history = state.history.clone();

    let lineup = tokio::task::spawn_blocking(move || {
        let lineup = recommender.generate_team(
            &request.team_description,
            &request.team_formation,
            &request.criteria(),
            request.budget,
        );

        let user_id = request.user_id.as_deref().unwrap_or("anonymous");
        match history.add(user_id, &request, &lineup) {
            Ok(entry) => info!("recorded team {} for {}", entry.team_hash, user_id),
            Err(e) => warn!("failed to record team history: {}", e),
        }

        lineup
    })
    .await?;

    Ok(Json(lineup))
}
