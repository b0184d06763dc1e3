use crate::player::{Column, PlayerRecord};
use serde::{Deserialize, Serialize};

/// Positional archetypes a composite fitness score exists for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Goalkeeper,
    CentreBack,
    FullBack,
    CentralMidfielder,
    /// Shared score for attacking and defensive midfielders
    AttackingDefensiveMidfielder,
    Striker,
}

pub struct ScoringFormula {
    pub archetype: Archetype,
    pub column: &'static str,
    pub label: &'static str,
    pub attributes: &'static [Column],
    pub divisor: f64,
}

// The central midfield sum has thirteen terms over a divisor of twelve.
// Changing any group or divisor changes recommendations.
pub const SCORING_FORMULAS: [ScoringFormula; 6] = [
    ScoringFormula {
        archetype: Archetype::Goalkeeper,
        column: "GK_Score",
        label: "GK",
        attributes: &[Column::Overall, Column::Penalties, Column::ShotPower],
        divisor: 3.0,
    },
    ScoringFormula {
        archetype: Archetype::CentreBack,
        column: "CB_Score",
        label: "CB",
        attributes: &[
            Column::Potential,
            Column::Height,
            Column::ShootingTotal,
            Column::PassingTotal,
            Column::DefendingTotal,
            Column::BallControl,
            Column::Jumping,
            Column::Interceptions,
            Column::Marking,
        ],
        divisor: 9.0,
    },
    ScoringFormula {
        archetype: Archetype::FullBack,
        column: "FB_Score",
        label: "FB",
        attributes: &[
            Column::Potential,
            Column::ShootingTotal,
            Column::PassingTotal,
            Column::DefendingTotal,
            Column::BallControl,
            Column::Jumping,
            Column::Interceptions,
            Column::Marking,
            Column::SprintSpeed,
            Column::Agility,
        ],
        divisor: 10.0,
    },
    ScoringFormula {
        archetype: Archetype::CentralMidfielder,
        column: "CM_Score",
        label: "CM",
        attributes: &[
            Column::Potential,
            Column::ShootingTotal,
            Column::PassingTotal,
            Column::DefendingTotal,
            Column::BallControl,
            Column::Jumping,
            Column::Interceptions,
            Column::Marking,
            Column::Crossing,
            Column::PhysicalityTotal,
            Column::ShortPassing,
            Column::Positioning,
            Column::Vision,
        ],
        divisor: 12.0,
    },
    ScoringFormula {
        archetype: Archetype::AttackingDefensiveMidfielder,
        column: "CAM_CDM_Score",
        label: "CAM/CDM",
        attributes: &[
            Column::Potential,
            Column::ShootingTotal,
            Column::PassingTotal,
            Column::DefendingTotal,
            Column::BallControl,
            Column::Interceptions,
            Column::Marking,
            Column::Crossing,
            Column::PhysicalityTotal,
            Column::ShortPassing,
            Column::Positioning,
            Column::Vision,
            Column::SprintSpeed,
            Column::Agility,
            Column::Dribbling,
        ],
        divisor: 15.0,
    },
    ScoringFormula {
        archetype: Archetype::Striker,
        column: "ST_Score",
        label: "ST",
        attributes: &[
            Column::Potential,
            Column::ShootingTotal,
            Column::PassingTotal,
            Column::BallControl,
            Column::Marking,
            Column::PhysicalityTotal,
            Column::ShortPassing,
            Column::Positioning,
            Column::Vision,
            Column::SprintSpeed,
            Column::Agility,
            Column::Dribbling,
            Column::Jumping,
        ],
        divisor: 13.0,
    },
];

impl Archetype {
    pub fn all() -> [Archetype; 6] {
        SCORING_FORMULAS.map(|formula| formula.archetype)
    }

    pub fn index(&self) -> usize {
        match self {
            Archetype::Goalkeeper => 0,
            Archetype::CentreBack => 1,
            Archetype::FullBack => 2,
            Archetype::CentralMidfielder => 3,
            Archetype::AttackingDefensiveMidfielder => 4,
            Archetype::Striker => 5,
        }
    }

    pub fn formula(&self) -> &'static ScoringFormula {
        &SCORING_FORMULAS[self.index()]
    }

    /// Score column name, e.g. `CB_Score`
    pub fn column(&self) -> &'static str {
        self.formula().column
    }

    pub fn label(&self) -> &'static str {
        self.formula().label
    }

    pub fn from_column(name: &str) -> Option<Archetype> {
        let normalized = crate::player::normalize_column_name(name);

        SCORING_FORMULAS
            .iter()
            .find(|formula| crate::player::normalize_column_name(formula.column) == normalized)
            .map(|formula| formula.archetype)
    }
}

impl ScoringFormula {
    /// Missing attributes propagate as NaN.
    pub fn evaluate(&self, player: &PlayerRecord) -> f64 {
        let sum: f64 = self
            .attributes
            .iter()
            .map(|column| player.numeric(*column).unwrap_or(f64::NAN))
            .sum();

        sum / self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerAttributes, PositionTag};

    fn player_with(attributes: PlayerAttributes, overall: f64) -> PlayerRecord {
        PlayerRecord::builder()
            .id(1)
            .best_position(PositionTag::CentreBack)
            .overall(overall)
            .attributes(attributes)
            .build()
            .expect("Failed to build test player")
    }

    #[test]
    fn test_formula_table_matches_archetype_order() {
        for archetype in Archetype::all() {
            assert_eq!(archetype.formula().archetype, archetype);
        }
    }

    #[test]
    fn test_attribute_group_sizes() {
        let sizes: Vec<usize> = SCORING_FORMULAS.iter().map(|f| f.attributes.len()).collect();
        assert_eq!(sizes, vec![3, 9, 10, 13, 15, 13]);
    }

    #[test]
    fn test_uniform_attributes_yield_uniform_scores_except_central_midfield() {
        let player = player_with(PlayerAttributes::uniform(60.0), 60.0);

        assert_eq!(Archetype::Goalkeeper.formula().evaluate(&player), 60.0);
        assert_eq!(Archetype::CentreBack.formula().evaluate(&player), 60.0);
        assert_eq!(Archetype::FullBack.formula().evaluate(&player), 60.0);
        assert_eq!(Archetype::AttackingDefensiveMidfielder.formula().evaluate(&player), 60.0);
        assert_eq!(Archetype::Striker.formula().evaluate(&player), 60.0);
        assert_eq!(Archetype::CentralMidfielder.formula().evaluate(&player), 65.0);
    }

    #[test]
    fn test_goalkeeper_score_uses_overall() {
        let mut attributes = PlayerAttributes::default();
        attributes.penalties = 30.0;
        attributes.shot_power = 45.0;
        let player = player_with(attributes, 90.0);

        assert_eq!(Archetype::Goalkeeper.formula().evaluate(&player), 55.0);
    }

    #[test]
    fn test_centre_back_score_ignores_speed() {
        let mut slow = PlayerAttributes::uniform(70.0);
        slow.sprint_speed = 10.0;
        let fast = PlayerAttributes::uniform(70.0);

        let slow_score = Archetype::CentreBack.formula().evaluate(&player_with(slow, 70.0));
        let fast_score = Archetype::CentreBack.formula().evaluate(&player_with(fast, 70.0));

        assert_eq!(slow_score, fast_score);
    }

    #[test]
    fn test_from_column_is_normalized() {
        assert_eq!(Archetype::from_column("cb_score"), Some(Archetype::CentreBack));
        assert_eq!(Archetype::from_column("CAM_CDM_Score"), Some(Archetype::AttackingDefensiveMidfielder));
        assert_eq!(Archetype::from_column("pace"), None);
    }
}
