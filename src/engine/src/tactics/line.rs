use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lines of a lineup, also used as criteria groups (`GK`, `DEF`, `MID`, `ATT`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum LineGroup {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defence,
    #[serde(rename = "MID")]
    Midfield,
    #[serde(rename = "ATT")]
    Attack,
}

impl LineGroup {
    /// Allocation order
    pub const ALL: [LineGroup; 4] = [
        LineGroup::Goalkeeper,
        LineGroup::Defence,
        LineGroup::Midfield,
        LineGroup::Attack,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LineGroup::Goalkeeper => "GK",
            LineGroup::Defence => "DEF",
            LineGroup::Midfield => "MID",
            LineGroup::Attack => "ATT",
        }
    }
}

impl Display for LineGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LineGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineGroup::ALL
            .into_iter()
            .find(|group| group.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown line group '{}'", s))
    }
}
