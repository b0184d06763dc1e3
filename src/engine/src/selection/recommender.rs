use crate::i18n::Language;
use crate::pool::PlayerPool;
use crate::selection::{Criteria, Lineup, PlayerSelector, Selection};
use crate::tactics::{Formation, LineGroup, SlotDeriver};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
enum AllocationError {
    #[error("invalid formation '{0}'")]
    InvalidFormation(String),
    #[error("no player matched the criteria within budget")]
    EmptyLineup,
}

/// Per call allocation state; never shared between calls.
struct AllocationState {
    remaining_budget: f64,
    used_ids: HashSet<u32>,
    selected: Vec<Selection>,
}

impl AllocationState {
    fn new(budget: f64) -> Self {
        AllocationState {
            remaining_budget: budget,
            used_ids: HashSet::new(),
            selected: Vec::with_capacity(11),
        }
    }

    fn record(&mut self, selection: Selection) {
        self.remaining_budget -= selection.value_eur;
        self.used_ids.insert(selection.player_id);
        self.selected.push(selection);
    }
}

/// Greedy line by line allocator over a shared, read-only pool.
#[derive(Debug, Clone)]
pub struct TeamRecommender {
    pool: Arc<PlayerPool>,
    language: Language,
}

impl TeamRecommender {
    pub fn new(pool: Arc<PlayerPool>) -> Self {
        TeamRecommender {
            pool,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn pool(&self) -> &PlayerPool {
        &self.pool
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Never fails: infeasible requests produce a partial lineup or the
    /// empty lineup with the failure analysis.
    pub fn generate_team(
        &self,
        description: &str,
        formation: &str,
        criteria: &Criteria,
        budget: f64,
    ) -> Lineup {
        match self.allocate(formation, criteria, budget) {
            Ok(selections) => {
                info!(
                    "generated {} team with {} players",
                    formation,
                    selections.len()
                );
                Lineup::from_selections(&selections, formation, description, self.language)
            }
            Err(error) => {
                warn!("team generation failed: {}", error);
                Lineup::empty(formation, description, self.language)
            }
        }
    }

    fn allocate(
        &self,
        notation: &str,
        criteria: &Criteria,
        budget: f64,
    ) -> Result<Vec<Selection>, AllocationError> {
        let formation = Formation::parse(notation)
            .ok_or_else(|| AllocationError::InvalidFormation(notation.to_string()))?;

        let selector = PlayerSelector::new(&self.pool);
        let mut state = AllocationState::new(budget);

        for line in LineGroup::ALL {
            let thresholds = criteria.thresholds(line);

            for slot in SlotDeriver::for_line(&formation, line) {
                if line != LineGroup::Goalkeeper && state.remaining_budget <= 0.0 {
                    debug!("budget exhausted, leaving remaining {} slots empty", line);
                    break;
                }

                match selector.select(slot, &thresholds, state.remaining_budget, &state.used_ids) {
                    Some(selection) => {
                        debug!(
                            "{} slot: player {} ({}), score {:.2}",
                            slot, selection.player_id, selection.name, selection.score
                        );
                        state.record(selection);
                    }
                    None => debug!("{} slot: no eligible player", slot),
                }
            }
        }

        if state.selected.is_empty() {
            return Err(AllocationError::EmptyLineup);
        }

        Ok(state.selected)
    }
}
