use engine::player::normalize_column_name;
use engine::{Column, PlayerTable};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("player dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to open player dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed player dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Headers of FIFA dataset exports that do not normalize to a canonical
/// column name on their own.
const HEADER_ALIASES: &[(&str, Column)] = &[
    ("sofifa_id", Column::Id),
    ("short_name", Column::Name),
    ("player_positions", Column::BestPosition),
    ("positions", Column::BestPosition),
    ("height_cm", Column::Height),
    ("movement_sprint_speed", Column::SprintSpeed),
    ("movement_agility", Column::Agility),
    ("skill_dribbling", Column::Dribbling),
    ("skill_ball_control", Column::BallControl),
    ("power_jumping", Column::Jumping),
    ("mentality_interceptions", Column::Interceptions),
    ("defending_marking", Column::Marking),
    ("attacking_crossing", Column::Crossing),
    ("attacking_short_passing", Column::ShortPassing),
    ("mentality_positioning", Column::Positioning),
    ("mentality_vision", Column::Vision),
    ("mentality_penalties", Column::Penalties),
    ("power_shot_power", Column::ShotPower),
    ("defending", Column::DefendingTotal),
    ("physic", Column::PhysicalityTotal),
    ("shooting", Column::ShootingTotal),
    ("passing", Column::PassingTotal),
];

pub struct PlayerDatasetLoader;

impl PlayerDatasetLoader {
    /// Reads a CSV dataset, gunzipping `*.gz` files, with headers mapped
    /// onto the canonical column names.
    pub fn load(path: impl AsRef<Path>) -> Result<PlayerTable, LoadError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = if Self::is_gzip(path) {
            Self::read(GzDecoder::new(file))?
        } else {
            Self::read(file)?
        };

        info!("loaded {} player rows from {}", table.len(), path.display());

        Ok(table)
    }

    pub fn read(reader: impl Read) -> Result<PlayerTable, LoadError> {
        let mut dataset = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = Self::canonical_headers(dataset.headers()?.iter());
        let best_position = headers
            .iter()
            .position(|header| header == Column::BestPosition.header());

        let mut table = PlayerTable::new(headers);

        for record in dataset.records() {
            let mut row: Vec<String> = record?.iter().map(str::to_string).collect();

            // position lists such as "ST, LW" keep their first entry
            if let Some(cell) = best_position.and_then(|idx| row.get_mut(idx)) {
                let first = cell.split(',').next().unwrap_or_default().trim().to_string();
                *cell = first;
            }

            table.push_row(row);
        }

        Ok(table)
    }

    /// Aliases claim their column first; remaining headers are matched case
    /// and separator insensitively. Unmatched headers are kept verbatim.
    fn canonical_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
        let raw: Vec<&str> = raw.collect();

        let mut resolved: Vec<Option<Column>> = raw
            .iter()
            .map(|header| {
                let normalized = normalize_column_name(header);
                HEADER_ALIASES
                    .iter()
                    .find(|(alias, _)| normalize_column_name(alias) == normalized)
                    .map(|(_, column)| *column)
            })
            .collect();

        for (idx, header) in raw.iter().enumerate() {
            if resolved[idx].is_some() {
                continue;
            }

            if let Some(column) = Column::from_header(header) {
                if !resolved.contains(&Some(column)) {
                    resolved[idx] = Some(column);
                }
            }
        }

        raw.iter()
            .zip(resolved)
            .map(|(header, column)| match column {
                Some(column) => {
                    if column.header() != *header {
                        debug!("dataset header '{}' read as '{}'", header, column.header());
                    }
                    column.header().to_string()
                }
                None => header.to_string(),
            })
            .collect()
    }

    fn is_gzip(path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("gz"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::PlayerPool;
    use engine::player::REQUIRED_COLUMNS;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn canonical_csv() -> String {
        let headers: Vec<&str> = REQUIRED_COLUMNS.iter().map(|(_, header)| *header).collect();
        let mut csv = headers.join(",");
        csv.push('\n');

        for (id, position, overall, value) in [(1, "GK", 80, 1_000_000), (2, "CB", 75, 5_000_000)] {
            let row: Vec<String> = REQUIRED_COLUMNS
                .iter()
                .map(|(column, _)| match column {
                    Column::Id => id.to_string(),
                    Column::Name => format!("Player {}", id),
                    Column::BestPosition => position.to_string(),
                    Column::Overall => overall.to_string(),
                    Column::ValueEur => value.to_string(),
                    Column::Nationality => "Spain".to_string(),
                    _ => "70".to_string(),
                })
                .collect();

            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }

    #[test]
    fn test_load_plain_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");
        std::fs::write(&path, canonical_csv()).unwrap();

        let table = PlayerDatasetLoader::load(&path).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(PlayerPool::from_table(&table).unwrap().len(), 2);
    }

    #[test]
    fn test_load_gzip_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(canonical_csv().as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let table = PlayerDatasetLoader::load(&path).unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = PlayerDatasetLoader::load(dir.path().join("absent.csv")).unwrap_err();

        assert!(matches!(error, LoadError::NotFound(_)));
    }

    #[test]
    fn test_snake_case_headers_are_normalized() {
        let csv = "id,name,best_position,value_eur,shot_power,Overall\n7,Someone,ST,100,80,77\n";

        let table = PlayerDatasetLoader::read(csv.as_bytes()).unwrap();

        assert_eq!(
            table.headers(),
            &["ID", "Name", "BestPosition", "ValueEUR", "ShotPower", "Overall"]
        );
    }

    #[test]
    fn test_fifa_export_headers() {
        let csv = "sofifa_id,short_name,player_positions,overall,dribbling,skill_dribbling,physic\n\
                   1,L. Messi,\"RW, ST, CF\",93,95,96,65\n";

        let table = PlayerDatasetLoader::read(csv.as_bytes()).unwrap();

        assert_eq!(
            table.headers(),
            &["ID", "Name", "BestPosition", "Overall", "dribbling", "Dribbling", "PhysicalityTotal"]
        );
        assert_eq!(table.rows()[0][2], "RW");
        assert_eq!(table.rows()[0][5], "96");
    }

    #[test]
    fn test_schema_errors_surface_through_pool() {
        let table = PlayerDatasetLoader::read("ID,Name\n1,A\n".as_bytes()).unwrap();

        assert!(PlayerPool::from_table(&table).is_err());
    }
}
