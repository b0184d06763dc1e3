/// Columns of the player dataset consumed by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Column {
    Id,
    Name,
    BestPosition,
    Overall,
    ValueEur,
    Nationality,
    Potential,
    Height,
    SprintSpeed,
    Agility,
    Dribbling,
    BallControl,
    Jumping,
    Interceptions,
    Marking,
    Crossing,
    ShortPassing,
    Positioning,
    Vision,
    Penalties,
    ShotPower,
    DefendingTotal,
    PhysicalityTotal,
    ShootingTotal,
    PassingTotal,
}

/// Required columns in dataset order, with their canonical header names
pub const REQUIRED_COLUMNS: &[(Column, &str)] = &[
    (Column::Id, "ID"),
    (Column::Name, "Name"),
    (Column::BestPosition, "BestPosition"),
    (Column::Overall, "Overall"),
    (Column::ValueEur, "ValueEUR"),
    (Column::Nationality, "Nationality"),
    (Column::Potential, "Potential"),
    (Column::Height, "Height"),
    (Column::SprintSpeed, "SprintSpeed"),
    (Column::Agility, "Agility"),
    (Column::Dribbling, "Dribbling"),
    (Column::BallControl, "BallControl"),
    (Column::Jumping, "Jumping"),
    (Column::Interceptions, "Interceptions"),
    (Column::Marking, "Marking"),
    (Column::Crossing, "Crossing"),
    (Column::ShortPassing, "ShortPassing"),
    (Column::Positioning, "Positioning"),
    (Column::Vision, "Vision"),
    (Column::Penalties, "Penalties"),
    (Column::ShotPower, "ShotPower"),
    (Column::DefendingTotal, "DefendingTotal"),
    (Column::PhysicalityTotal, "PhysicalityTotal"),
    (Column::ShootingTotal, "ShootingTotal"),
    (Column::PassingTotal, "PassingTotal"),
];

impl Column {
    pub fn header(&self) -> &'static str {
        REQUIRED_COLUMNS
            .iter()
            .find(|(column, _)| column == self)
            .map(|(_, header)| *header)
            .unwrap_or("")
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Column::Name | Column::BestPosition | Column::Nationality)
    }

    /// Resolves a header using case- and separator-insensitive matching,
    /// so `ValueEUR`, `value_eur` and `VALUE EUR` are the same column.
    pub fn from_header(header: &str) -> Option<Column> {
        let normalized = normalize_column_name(header);

        REQUIRED_COLUMNS
            .iter()
            .find(|(_, canonical)| normalize_column_name(canonical) == normalized)
            .map(|(column, _)| *column)
    }
}

pub fn normalize_column_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_ignores_case_and_separators() {
        assert_eq!(Column::from_header("overall"), Some(Column::Overall));
        assert_eq!(Column::from_header("value_eur"), Some(Column::ValueEur));
        assert_eq!(Column::from_header("Shot Power"), Some(Column::ShotPower));
        assert_eq!(Column::from_header("best-position"), Some(Column::BestPosition));
        assert_eq!(Column::from_header("pace"), None);
    }

    #[test]
    fn test_headers_are_canonical() {
        assert_eq!(Column::ValueEur.header(), "ValueEUR");
        assert_eq!(Column::Id.header(), "ID");
        assert_eq!(REQUIRED_COLUMNS.len(), 25);
    }

    #[test]
    fn test_text_columns_are_not_numeric() {
        assert!(!Column::Name.is_numeric());
        assert!(!Column::Nationality.is_numeric());
        assert!(Column::Id.is_numeric());
        assert!(Column::Height.is_numeric());
    }
}
