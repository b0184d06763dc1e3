use crate::pool::{PlayerPool, ScoredPlayer};
use crate::selection::Threshold;
use crate::tactics::Slot;
use std::cmp::Ordering;
use std::collections::HashSet;

/// One player picked for one slot, with the composite score that ranked it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub player_id: u32,
    pub name: String,
    pub slot: Slot,
    pub overall: f64,
    pub value_eur: f64,
    pub nationality: String,
    pub score: f64,
}

impl Selection {
    fn new(player: &ScoredPlayer, slot: Slot, score: f64) -> Self {
        Selection {
            player_id: player.id(),
            name: player.record.name.clone(),
            slot,
            overall: player.record.overall,
            value_eur: player.record.value_eur,
            nationality: player.record.nationality.clone(),
            score,
        }
    }
}

pub struct PlayerSelector<'p> {
    pool: &'p PlayerPool,
}

impl<'p> PlayerSelector<'p> {
    pub fn new(pool: &'p PlayerPool) -> Self {
        PlayerSelector { pool }
    }

    /// Best candidate for `slot` that is eligible, unused, affordable and
    /// meets every threshold. Equal scores go to the lowest id; players
    /// whose score cannot be computed are never picked.
    pub fn select(
        &self,
        slot: Slot,
        thresholds: &[Threshold],
        budget: f64,
        used_ids: &HashSet<u32>,
    ) -> Option<Selection> {
        let archetype = slot.archetype();

        self.pool
            .players()
            .iter()
            .filter(|player| slot.accepts(player.record.best_position))
            .filter(|player| !used_ids.contains(&player.id()))
            .filter(|player| player.record.value_eur <= budget)
            .filter(|player| thresholds.iter().all(|threshold| threshold.is_met_by(player)))
            .map(|player| (player, player.score(archetype)))
            .filter(|(_, score)| !score.is_nan())
            .max_by(|(a, a_score), (b, b_score)| Self::rank(a, *a_score, b, *b_score))
            .map(|(player, score)| Selection::new(player, slot, score))
    }

    fn rank(a: &ScoredPlayer, a_score: f64, b: &ScoredPlayer, b_score: f64) -> Ordering {
        a_score
            .total_cmp(&b_score)
            .then_with(|| b.id().cmp(&a.id()))
    }
}
