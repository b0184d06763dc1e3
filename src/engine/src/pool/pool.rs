use crate::player::{Column, PlayerAttributes, PlayerRecord, PositionTag, REQUIRED_COLUMNS};
use crate::pool::{PlayerTable, SchemaError};
use crate::scoring::{Archetype, CompositeScores, ScoringPreprocessor};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct ScoredPlayer {
    pub record: PlayerRecord,
    pub scores: CompositeScores,
}

impl ScoredPlayer {
    pub fn new(record: PlayerRecord) -> Self {
        let scores = ScoringPreprocessor::score(&record);
        ScoredPlayer { record, scores }
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn score(&self, archetype: Archetype) -> f64 {
        self.scores.get(archetype)
    }
}

/// Read-only candidate pool. Scores are computed once here and never
/// mutated afterwards, so one pool can serve concurrent allocations.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<ScoredPlayer>,
}

impl PlayerPool {
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        PlayerPool {
            players: records.into_iter().map(ScoredPlayer::new).collect(),
        }
    }

    /// Validates the schema, drops rows without a usable `BestPosition`
    /// or `Overall`, coerces unreadable `ValueEUR` to zero and computes
    /// the composite scores. The table itself is left untouched.
    pub fn from_table(table: &PlayerTable) -> Result<Self, SchemaError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|(_, header)| table.position(header).is_none())
            .map(|(_, header)| header.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }

        let indexes: Vec<(Column, usize)> = REQUIRED_COLUMNS
            .iter()
            .filter_map(|(column, header)| table.position(header).map(|idx| (*column, idx)))
            .collect();

        let mut records = Vec::with_capacity(table.len());

        for (row_number, row) in table.rows().iter().enumerate() {
            match Self::parse_row(row, &indexes) {
                Some(record) => records.push(record),
                None => debug!("dropping row {}: missing identity, position or overall", row_number + 1),
            }
        }

        info!(
            "player pool prepared: {} players ({} rows dropped)",
            records.len(),
            table.len() - records.len()
        );

        Ok(Self::from_records(records))
    }

    fn parse_row(row: &[String], indexes: &[(Column, usize)]) -> Option<PlayerRecord> {
        let cell = |column: Column| {
            indexes
                .iter()
                .find(|(c, _)| *c == column)
                .and_then(|(_, idx)| row.get(*idx))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let number = |column: Column| {
            cell(column)
                .and_then(|value| value.parse::<f64>().ok())
                .filter(|value| !value.is_nan())
        };

        let best_position: PositionTag = cell(Column::BestPosition)?.parse().ok()?;
        let overall = number(Column::Overall)?;
        let id = cell(Column::Id)?.parse::<u32>().ok()?;

        let mut attributes = PlayerAttributes::default();
        for (column, _) in indexes {
            if attributes.get(*column).is_some() {
                attributes.set(*column, number(*column).unwrap_or(f64::NAN));
            }
        }

        Some(PlayerRecord {
            id,
            name: cell(Column::Name).unwrap_or_default().to_string(),
            best_position,
            overall,
            value_eur: number(Column::ValueEur).map_or(0.0, |value| value.max(0.0)),
            nationality: cell(Column::Nationality).unwrap_or_default().to_string(),
            attributes,
        })
    }

    pub fn players(&self) -> &[ScoredPlayer] {
        &self.players
    }

    pub fn find(&self, id: u32) -> Option<&ScoredPlayer> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Highest value of a numeric column, lowest id on ties.
    pub fn best_by(&self, column: Column) -> Option<&ScoredPlayer> {
        self.players
            .iter()
            .filter_map(|player| {
                player
                    .record
                    .numeric(column)
                    .filter(|value| !value.is_nan())
                    .map(|value| (player, value))
            })
            .max_by(|(a, a_value), (b, b_value)| {
                a_value.total_cmp(b_value).then_with(|| b.id().cmp(&a.id()))
            })
            .map(|(player, _)| player)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
