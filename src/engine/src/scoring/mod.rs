pub mod archetype;

pub use archetype::*;

use crate::player::PlayerRecord;

/// One composite score per archetype, computed once per pooled player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScores([f64; 6]);

impl CompositeScores {
    pub fn get(&self, archetype: Archetype) -> f64 {
        self.0[archetype.index()]
    }
}

pub struct ScoringPreprocessor;

impl ScoringPreprocessor {
    pub fn score(player: &PlayerRecord) -> CompositeScores {
        CompositeScores(SCORING_FORMULAS.each_ref().map(|formula| formula.evaluate(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerAttributes, PositionTag};

    #[test]
    fn test_scores_are_indexed_by_archetype() {
        let mut attributes = PlayerAttributes::uniform(50.0);
        attributes.penalties = 80.0;
        attributes.shot_power = 80.0;

        let player = PlayerRecord::builder()
            .id(1)
            .best_position(PositionTag::Goalkeeper)
            .overall(80.0)
            .attributes(attributes)
            .build()
            .expect("Failed to build test player");

        let scores = ScoringPreprocessor::score(&player);

        assert_eq!(scores.get(Archetype::Goalkeeper), 80.0);
        assert_eq!(scores.get(Archetype::CentreBack), 50.0);
        assert_eq!(scores.get(Archetype::Striker), 50.0);
    }
}
