use crate::player::Column;
use crate::pool::ScoredPlayer;
use crate::scoring::Archetype;
use crate::tactics::LineGroup;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MIN_PREFIX: &str = "min_";

/// Column a threshold is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionTarget {
    Attribute(Column),
    Score(Archetype),
}

impl CriterionTarget {
    /// Strips an optional `min_` prefix and matches the rest against the
    /// numeric dataset columns and the composite score columns.
    pub fn resolve(name: &str) -> Option<CriterionTarget> {
        let name = name.trim();
        let name = match name.get(..MIN_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(MIN_PREFIX) => &name[MIN_PREFIX.len()..],
            _ => name,
        };

        Column::from_header(name)
            .filter(Column::is_numeric)
            .map(CriterionTarget::Attribute)
            .or_else(|| Archetype::from_column(name).map(CriterionTarget::Score))
    }

    pub fn value(&self, player: &ScoredPlayer) -> f64 {
        match self {
            CriterionTarget::Attribute(column) => {
                player.record.numeric(*column).unwrap_or(f64::NAN)
            }
            CriterionTarget::Score(archetype) => player.score(*archetype),
        }
    }
}

/// Inclusive lower bound on one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub target: CriterionTarget,
    pub minimum: f64,
}

impl Threshold {
    /// NaN never meets a threshold.
    pub fn is_met_by(&self, player: &ScoredPlayer) -> bool {
        self.target.value(player) >= self.minimum
    }
}

/// Thresholds for one line, keyed by attribute name as the caller wrote it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCriteria(BTreeMap<String, f64>);

impl GroupCriteria {
    pub fn new() -> Self {
        GroupCriteria::default()
    }

    pub fn with(mut self, attribute: impl Into<String>, minimum: f64) -> Self {
        self.insert(attribute, minimum);
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, minimum: f64) {
        self.0.insert(attribute.into(), minimum);
    }

    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.0.get(attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, minimum)| (name.as_str(), *minimum))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries naming unknown or non-numeric columns are skipped.
    pub fn resolve(&self) -> Vec<Threshold> {
        self.iter()
            .filter_map(|(name, minimum)| match CriterionTarget::resolve(name) {
                Some(target) => Some(Threshold { target, minimum }),
                None => {
                    debug!("ignoring criterion on unknown column '{}'", name);
                    None
                }
            })
            .collect()
    }
}

/// Per line criteria; absent lines filter nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(BTreeMap<LineGroup, GroupCriteria>);

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    pub fn with(mut self, line: LineGroup, group: GroupCriteria) -> Self {
        self.0.insert(line, group);
        self
    }

    pub fn group(&self, line: LineGroup) -> Option<&GroupCriteria> {
        self.0.get(&line)
    }

    pub fn group_mut(&mut self, line: LineGroup) -> &mut GroupCriteria {
        self.0.entry(line).or_default()
    }

    pub fn thresholds(&self, line: LineGroup) -> Vec<Threshold> {
        self.group(line).map(GroupCriteria::resolve).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineGroup, &GroupCriteria)> {
        self.0.iter().map(|(line, group)| (*line, group))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(GroupCriteria::is_empty)
    }
}
