use crate::player::{Column, PlayerAttributes, PlayerRecord, PositionTag};

// Builder for PlayerRecord
#[derive(Default)]
pub struct PlayerRecordBuilder {
    id: Option<u32>,
    name: Option<String>,
    best_position: Option<PositionTag>,
    overall: Option<f64>,
    value_eur: Option<f64>,
    nationality: Option<String>,
    attributes: Option<PlayerAttributes>,
}

impl PlayerRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn best_position(mut self, best_position: PositionTag) -> Self {
        self.best_position = Some(best_position);
        self
    }

    pub fn overall(mut self, overall: f64) -> Self {
        self.overall = Some(overall);
        self
    }

    pub fn value_eur(mut self, value_eur: f64) -> Self {
        self.value_eur = Some(value_eur);
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn attribute(mut self, column: Column, value: f64) -> Self {
        let mut attributes = self.attributes.take().unwrap_or_default();
        attributes.set(column, value);
        self.attributes = Some(attributes);
        self
    }

    pub fn build(self) -> Result<PlayerRecord, String> {
        Ok(PlayerRecord {
            id: self.id.ok_or("id is required")?,
            name: self.name.unwrap_or_default(),
            best_position: self.best_position.ok_or("best_position is required")?,
            overall: self.overall.ok_or("overall is required")?,
            value_eur: self.value_eur.unwrap_or(0.0),
            nationality: self.nationality.unwrap_or_default(),
            attributes: self.attributes.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_identity_position_and_overall() {
        assert!(PlayerRecordBuilder::new().id(1).overall(70.0).build().is_err());
        assert!(
            PlayerRecordBuilder::new()
                .best_position(PositionTag::Striker)
                .overall(70.0)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_build_defaults_value_to_zero() {
        let player = PlayerRecordBuilder::new()
            .id(3)
            .name("Striker")
            .best_position(PositionTag::Striker)
            .overall(81.0)
            .attribute(Column::Dribbling, 88.0)
            .build()
            .expect("Failed to build test player");

        assert_eq!(player.value_eur, 0.0);
        assert_eq!(player.attributes.dribbling, 88.0);
        assert_eq!(player.attributes.potential, 0.0);
    }
}
