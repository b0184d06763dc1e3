use crate::player::builder::PlayerRecordBuilder;
use crate::player::{Column, PositionTag};

/// Raw skill attributes carried by every pooled player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerAttributes {
    pub potential: f64,
    pub height: f64,
    pub sprint_speed: f64,
    pub agility: f64,
    pub dribbling: f64,
    pub ball_control: f64,
    pub jumping: f64,
    pub interceptions: f64,
    pub marking: f64,
    pub crossing: f64,
    pub short_passing: f64,
    pub positioning: f64,
    pub vision: f64,
    pub penalties: f64,
    pub shot_power: f64,
    pub defending_total: f64,
    pub physicality_total: f64,
    pub shooting_total: f64,
    pub passing_total: f64,
}

impl PlayerAttributes {
    pub fn uniform(value: f64) -> Self {
        PlayerAttributes {
            potential: value,
            height: value,
            sprint_speed: value,
            agility: value,
            dribbling: value,
            ball_control: value,
            jumping: value,
            interceptions: value,
            marking: value,
            crossing: value,
            short_passing: value,
            positioning: value,
            vision: value,
            penalties: value,
            shot_power: value,
            defending_total: value,
            physicality_total: value,
            shooting_total: value,
            passing_total: value,
        }
    }

    fn slot_mut(&mut self, column: Column) -> Option<&mut f64> {
        match column {
            Column::Potential => Some(&mut self.potential),
            Column::Height => Some(&mut self.height),
            Column::SprintSpeed => Some(&mut self.sprint_speed),
            Column::Agility => Some(&mut self.agility),
            Column::Dribbling => Some(&mut self.dribbling),
            Column::BallControl => Some(&mut self.ball_control),
            Column::Jumping => Some(&mut self.jumping),
            Column::Interceptions => Some(&mut self.interceptions),
            Column::Marking => Some(&mut self.marking),
            Column::Crossing => Some(&mut self.crossing),
            Column::ShortPassing => Some(&mut self.short_passing),
            Column::Positioning => Some(&mut self.positioning),
            Column::Vision => Some(&mut self.vision),
            Column::Penalties => Some(&mut self.penalties),
            Column::ShotPower => Some(&mut self.shot_power),
            Column::DefendingTotal => Some(&mut self.defending_total),
            Column::PhysicalityTotal => Some(&mut self.physicality_total),
            Column::ShootingTotal => Some(&mut self.shooting_total),
            Column::PassingTotal => Some(&mut self.passing_total),
            _ => None,
        }
    }

    pub fn get(&self, column: Column) -> Option<f64> {
        match column {
            Column::Potential => Some(self.potential),
            Column::Height => Some(self.height),
            Column::SprintSpeed => Some(self.sprint_speed),
            Column::Agility => Some(self.agility),
            Column::Dribbling => Some(self.dribbling),
            Column::BallControl => Some(self.ball_control),
            Column::Jumping => Some(self.jumping),
            Column::Interceptions => Some(self.interceptions),
            Column::Marking => Some(self.marking),
            Column::Crossing => Some(self.crossing),
            Column::ShortPassing => Some(self.short_passing),
            Column::Positioning => Some(self.positioning),
            Column::Vision => Some(self.vision),
            Column::Penalties => Some(self.penalties),
            Column::ShotPower => Some(self.shot_power),
            Column::DefendingTotal => Some(self.defending_total),
            Column::PhysicalityTotal => Some(self.physicality_total),
            Column::ShootingTotal => Some(self.shooting_total),
            Column::PassingTotal => Some(self.passing_total),
            _ => None,
        }
    }

    /// Returns false when the column is not a skill attribute.
    pub fn set(&mut self, column: Column, value: f64) -> bool {
        match self.slot_mut(column) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub id: u32,
    pub name: String,
    pub best_position: PositionTag,
    pub overall: f64,
    pub value_eur: f64,
    pub nationality: String,
    pub attributes: PlayerAttributes,
}

impl PlayerRecord {
    pub fn builder() -> PlayerRecordBuilder {
        PlayerRecordBuilder::new()
    }

    /// Numeric value of a column, `None` for text columns.
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::Id => Some(self.id as f64),
            Column::Overall => Some(self.overall),
            Column::ValueEur => Some(self.value_eur),
            Column::Name | Column::BestPosition | Column::Nationality => None,
            attribute => self.attributes.get(attribute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_reads_identity_and_attributes() {
        let mut attributes = PlayerAttributes::uniform(60.0);
        attributes.set(Column::Vision, 91.0);

        let player = PlayerRecord {
            id: 7,
            name: "Test".to_string(),
            best_position: PositionTag::CentralMidfielder,
            overall: 84.0,
            value_eur: 1_500_000.0,
            nationality: "Spain".to_string(),
            attributes,
        };

        assert_eq!(player.numeric(Column::Id), Some(7.0));
        assert_eq!(player.numeric(Column::Overall), Some(84.0));
        assert_eq!(player.numeric(Column::ValueEur), Some(1_500_000.0));
        assert_eq!(player.numeric(Column::Vision), Some(91.0));
        assert_eq!(player.numeric(Column::Jumping), Some(60.0));
        assert_eq!(player.numeric(Column::Name), None);
    }

    #[test]
    fn test_set_rejects_non_attribute_columns() {
        let mut attributes = PlayerAttributes::default();

        assert!(attributes.set(Column::Marking, 70.0));
        assert!(!attributes.set(Column::Overall, 70.0));
        assert_eq!(attributes.marking, 70.0);
    }
}
