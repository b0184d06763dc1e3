use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Dataset `BestPosition` vocabulary
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PositionTag {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "RWB")]
    RightWingBack,
    #[serde(rename = "LWB")]
    LeftWingBack,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "CAM")]
    AttackingMidfielder,
    #[serde(rename = "RM")]
    RightMidfielder,
    #[serde(rename = "LM")]
    LeftMidfielder,
    #[serde(rename = "RW")]
    RightWinger,
    #[serde(rename = "LW")]
    LeftWinger,
    #[serde(rename = "CF")]
    CentreForward,
    #[serde(rename = "ST")]
    Striker,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

pub const POSITION_TAGS: &[(PositionTag, &str, PositionGroup)] = &[
    (PositionTag::Goalkeeper, "GK", PositionGroup::Goalkeeper),
    (PositionTag::CentreBack, "CB", PositionGroup::Defender),
    (PositionTag::RightBack, "RB", PositionGroup::Defender),
    (PositionTag::LeftBack, "LB", PositionGroup::Defender),
    (PositionTag::RightWingBack, "RWB", PositionGroup::Defender),
    (PositionTag::LeftWingBack, "LWB", PositionGroup::Defender),
    (PositionTag::DefensiveMidfielder, "CDM", PositionGroup::Midfielder),
    (PositionTag::CentralMidfielder, "CM", PositionGroup::Midfielder),
    (PositionTag::AttackingMidfielder, "CAM", PositionGroup::Midfielder),
    (PositionTag::RightMidfielder, "RM", PositionGroup::Midfielder),
    (PositionTag::LeftMidfielder, "LM", PositionGroup::Midfielder),
    (PositionTag::RightWinger, "RW", PositionGroup::Forward),
    (PositionTag::LeftWinger, "LW", PositionGroup::Forward),
    (PositionTag::CentreForward, "CF", PositionGroup::Forward),
    (PositionTag::Striker, "ST", PositionGroup::Forward),
];

impl PositionTag {
    fn entry(&self) -> &'static (PositionTag, &'static str, PositionGroup) {
        // every variant is listed in POSITION_TAGS
        POSITION_TAGS
            .iter()
            .find(|(tag, _, _)| tag == self)
            .unwrap_or(&POSITION_TAGS[0])
    }

    pub fn short_name(&self) -> &'static str {
        self.entry().1
    }

    pub fn group(&self) -> PositionGroup {
        self.entry().2
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.group() == PositionGroup::Goalkeeper
    }
}

impl Display for PositionTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position tag '{0}'")]
pub struct UnknownPositionTag(pub String);

impl FromStr for PositionTag {
    type Err = UnknownPositionTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();

        POSITION_TAGS
            .iter()
            .find(|(_, short_name, _)| short_name.eq_ignore_ascii_case(tag))
            .map(|(position, _, _)| *position)
            .ok_or_else(|| UnknownPositionTag(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" cdm ".parse::<PositionTag>(), Ok(PositionTag::DefensiveMidfielder));
        assert_eq!("ST".parse::<PositionTag>(), Ok(PositionTag::Striker));
        assert!("SW".parse::<PositionTag>().is_err());
    }

    #[test]
    fn test_short_names_round_trip_through_parse() {
        for (tag, short_name, _) in POSITION_TAGS {
            assert_eq!(tag.short_name(), *short_name);
            assert_eq!(short_name.parse::<PositionTag>().as_ref(), Ok(tag));
        }
    }

    #[test]
    fn test_groups() {
        assert!(PositionTag::Goalkeeper.is_goalkeeper());
        assert_eq!(PositionTag::LeftWingBack.group(), PositionGroup::Defender);
        assert_eq!(PositionTag::RightMidfielder.group(), PositionGroup::Midfielder);
        assert_eq!(PositionTag::CentreForward.group(), PositionGroup::Forward);
    }

    #[test]
    fn test_serializes_as_short_name() {
        let json = serde_json::to_string(&PositionTag::AttackingMidfielder).unwrap();
        assert_eq!(json, "\"CAM\"");
    }
}
