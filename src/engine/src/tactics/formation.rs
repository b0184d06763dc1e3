use crate::tactics::LineGroup;
use std::fmt::{Display, Formatter};

pub const OUTFIELD_PLAYERS: u32 = 10;

/// Attackers implied when a formation has no third segment.
const IMPLIED_ATTACKERS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub goalkeepers: u8,
    pub defenders: u8,
    pub midfielders: u8,
    pub attackers: u8,
}

impl LineCounts {
    pub fn count(&self, line: LineGroup) -> u8 {
        match line {
            LineGroup::Goalkeeper => self.goalkeepers,
            LineGroup::Defence => self.defenders,
            LineGroup::Midfield => self.midfielders,
            LineGroup::Attack => self.attackers,
        }
    }
}

/// A validated `D-M` or `D-M-A` formation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    notation: String,
    segments: Vec<u8>,
}

impl Formation {
    /// Returns `None` for anything that is not two or three positive
    /// dash-separated integers adding up to ten.
    pub fn parse(notation: &str) -> Option<Formation> {
        let notation = notation.trim();

        let segments = notation
            .split('-')
            .map(|segment| segment.trim().parse::<u8>().ok().filter(|count| *count > 0))
            .collect::<Option<Vec<u8>>>()?;

        if !(2..=3).contains(&segments.len()) {
            return None;
        }

        let outfield: u32 = segments.iter().map(|&count| count as u32).sum();
        if outfield != OUTFIELD_PLAYERS {
            return None;
        }

        Some(Formation {
            notation: notation.to_string(),
            segments,
        })
    }

    /// First token of free text that parses as a formation, e.g. "let's play 4-4-2!"
    pub fn find_in(text: &str) -> Option<Formation> {
        text.split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_ascii_digit()))
            .find_map(Formation::parse)
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn segments(&self) -> &[u8] {
        &self.segments
    }

    pub fn line_counts(&self) -> LineCounts {
        LineCounts {
            goalkeepers: 1,
            defenders: self.segments[0],
            midfielders: self.segments[1],
            attackers: self.segments.get(2).copied().unwrap_or(IMPLIED_ATTACKERS),
        }
    }
}

impl Display for Formation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_formations() {
        let counts = Formation::parse("4-3-3").unwrap().line_counts();
        assert_eq!(
            counts,
            LineCounts {
                goalkeepers: 1,
                defenders: 4,
                midfielders: 3,
                attackers: 3
            }
        );

        let counts = Formation::parse("4-4-2").unwrap().line_counts();
        assert_eq!((counts.defenders, counts.midfielders, counts.attackers), (4, 4, 2));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(Formation::parse("4-3").is_none());
        assert!(Formation::parse("abc").is_none());
        assert!(Formation::parse("invalid").is_none());
        assert!(Formation::parse("").is_none());
        assert!(Formation::parse("4-4-1-1").is_none());
        assert!(Formation::parse("4-6-0").is_none());
        assert!(Formation::parse("4--6").is_none());
        assert!(Formation::parse("10").is_none());
    }

    #[test]
    fn test_all_valid_three_line_formations_sum_to_ten() {
        for d in 1..=8u8 {
            for m in 1..=8u8 {
                for a in 1..=8u8 {
                    let notation = format!("{}-{}-{}", d, m, a);
                    let parsed = Formation::parse(&notation);

                    if d + m + a == 10 {
                        let counts = parsed.expect("valid formation").line_counts();
                        let outfield = counts.defenders + counts.midfielders + counts.attackers;
                        assert_eq!(outfield, 10);
                    } else {
                        assert!(parsed.is_none(), "{} should be rejected", notation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_two_line_formation_implies_one_attacker() {
        let counts = Formation::parse("5-5").unwrap().line_counts();
        assert_eq!(counts.attackers, 1);
    }

    #[test]
    fn test_find_in_free_text() {
        assert_eq!(
            Formation::find_in("let's play 4-4-2!").map(|f| f.notation().to_string()),
            Some("4-4-2".to_string())
        );
        assert!(Formation::find_in("no idea").is_none());
    }
}
