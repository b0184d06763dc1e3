use crate::player::PositionTag;
use crate::scoring::Archetype;
use crate::tactics::{Formation, LineGroup};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named lineup requirement a single player is picked for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "FB")]
    FullBack,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "CAM")]
    AttackingMidfielder,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "RM")]
    RightMidfielder,
    #[serde(rename = "LM")]
    LeftMidfielder,
    #[serde(rename = "ST")]
    Striker,
    #[serde(rename = "LW")]
    LeftWinger,
    #[serde(rename = "RW")]
    RightWinger,
}

#[derive(Debug)]
pub struct SlotProfile {
    pub slot: Slot,
    pub code: &'static str,
    pub line: LineGroup,
    pub eligible: &'static [PositionTag],
    pub archetype: Archetype,
}

const GOALKEEPERS: &[PositionTag] = &[PositionTag::Goalkeeper];
const CENTRE_BACKS: &[PositionTag] = &[PositionTag::CentreBack];
const FULL_BACKS: &[PositionTag] = &[
    PositionTag::LeftBack,
    PositionTag::RightBack,
    PositionTag::LeftWingBack,
    PositionTag::RightWingBack,
];
const CENTRAL_MIDFIELDERS: &[PositionTag] = &[PositionTag::CentralMidfielder];
const CAM_CDM: &[PositionTag] = &[
    PositionTag::AttackingMidfielder,
    PositionTag::DefensiveMidfielder,
];
const FORWARDS: &[PositionTag] = &[
    PositionTag::Striker,
    PositionTag::LeftWinger,
    PositionTag::RightWinger,
    PositionTag::CentreForward,
];

pub const SLOT_PROFILES: &[SlotProfile] = &[
    SlotProfile {
        slot: Slot::Goalkeeper,
        code: "GK",
        line: LineGroup::Goalkeeper,
        eligible: GOALKEEPERS,
        archetype: Archetype::Goalkeeper,
    },
    SlotProfile {
        slot: Slot::CentreBack,
        code: "CB",
        line: LineGroup::Defence,
        eligible: CENTRE_BACKS,
        archetype: Archetype::CentreBack,
    },
    SlotProfile {
        slot: Slot::FullBack,
        code: "FB",
        line: LineGroup::Defence,
        eligible: FULL_BACKS,
        archetype: Archetype::FullBack,
    },
    SlotProfile {
        slot: Slot::CentralMidfielder,
        code: "CM",
        line: LineGroup::Midfield,
        eligible: CENTRAL_MIDFIELDERS,
        archetype: Archetype::CentralMidfielder,
    },
    SlotProfile {
        slot: Slot::AttackingMidfielder,
        code: "CAM",
        line: LineGroup::Midfield,
        eligible: CAM_CDM,
        archetype: Archetype::AttackingDefensiveMidfielder,
    },
    SlotProfile {
        slot: Slot::DefensiveMidfielder,
        code: "CDM",
        line: LineGroup::Midfield,
        eligible: CAM_CDM,
        archetype: Archetype::AttackingDefensiveMidfielder,
    },
    SlotProfile {
        slot: Slot::RightMidfielder,
        code: "RM",
        line: LineGroup::Midfield,
        eligible: CAM_CDM,
        archetype: Archetype::AttackingDefensiveMidfielder,
    },
    SlotProfile {
        slot: Slot::LeftMidfielder,
        code: "LM",
        line: LineGroup::Midfield,
        eligible: CAM_CDM,
        archetype: Archetype::AttackingDefensiveMidfielder,
    },
    SlotProfile {
        slot: Slot::Striker,
        code: "ST",
        line: LineGroup::Attack,
        eligible: FORWARDS,
        archetype: Archetype::Striker,
    },
    SlotProfile {
        slot: Slot::LeftWinger,
        code: "LW",
        line: LineGroup::Attack,
        eligible: FORWARDS,
        archetype: Archetype::Striker,
    },
    SlotProfile {
        slot: Slot::RightWinger,
        code: "RW",
        line: LineGroup::Attack,
        eligible: FORWARDS,
        archetype: Archetype::Striker,
    },
];

impl Slot {
    pub fn profile(&self) -> &'static SlotProfile {
        // every variant is listed in SLOT_PROFILES
        SLOT_PROFILES
            .iter()
            .find(|profile| profile.slot == *self)
            .unwrap_or(&SLOT_PROFILES[0])
    }

    pub fn code(&self) -> &'static str {
        self.profile().code
    }

    pub fn line(&self) -> LineGroup {
        self.profile().line
    }

    pub fn archetype(&self) -> Archetype {
        self.profile().archetype
    }

    pub fn accepts(&self, position: PositionTag) -> bool {
        self.profile().eligible.contains(&position)
    }

    pub fn from_code(code: &str) -> Option<Slot> {
        SLOT_PROFILES
            .iter()
            .find(|profile| profile.code.eq_ignore_ascii_case(code.trim()))
            .map(|profile| profile.slot)
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Formations with hand-picked slot layouts; anything else uses the count based expansion.
const SLOT_OVERRIDES: &[(&str, LineGroup, &[Slot])] = &[
    (
        "4-3-3",
        LineGroup::Midfield,
        &[
            Slot::CentralMidfielder,
            Slot::AttackingMidfielder,
            Slot::DefensiveMidfielder,
        ],
    ),
    (
        "4-3-3",
        LineGroup::Attack,
        &[Slot::Striker, Slot::LeftWinger, Slot::RightWinger],
    ),
    (
        "4-4-2",
        LineGroup::Midfield,
        &[
            Slot::CentralMidfielder,
            Slot::CentralMidfielder,
            Slot::RightMidfielder,
            Slot::LeftMidfielder,
        ],
    ),
    ("4-4-2", LineGroup::Attack, &[Slot::Striker, Slot::Striker]),
];

const MAX_CENTRE_BACKS: u8 = 2;

pub struct SlotDeriver;

impl SlotDeriver {
    pub fn for_line(formation: &Formation, line: LineGroup) -> Vec<Slot> {
        if let Some((_, _, slots)) = SLOT_OVERRIDES
            .iter()
            .find(|(notation, group, _)| *notation == formation.notation() && *group == line)
        {
            return slots.to_vec();
        }

        let counts = formation.line_counts();

        match line {
            LineGroup::Goalkeeper => vec![Slot::Goalkeeper; counts.goalkeepers as usize],
            LineGroup::Defence => {
                let centre_backs = counts.defenders.min(MAX_CENTRE_BACKS);

                let mut slots = vec![Slot::CentreBack; centre_backs as usize];
                slots.extend(vec![
                    Slot::FullBack;
                    (counts.defenders - centre_backs) as usize
                ]);
                slots
            }
            LineGroup::Midfield => vec![Slot::CentralMidfielder; counts.midfielders as usize],
            LineGroup::Attack => vec![Slot::Striker; counts.attackers as usize],
        }
    }

    pub fn defence(formation: &Formation) -> Vec<Slot> {
        Self::for_line(formation, LineGroup::Defence)
    }

    pub fn midfield(formation: &Formation) -> Vec<Slot> {
        Self::for_line(formation, LineGroup::Midfield)
    }

    pub fn attack(formation: &Formation) -> Vec<Slot> {
        Self::for_line(formation, LineGroup::Attack)
    }
}
