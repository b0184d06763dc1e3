use crate::selection::Criteria;
use crate::tactics::LineGroup;

const GOALKEEPER_MIN_OVERALL: f64 = 70.0;

type Adjustments = &'static [(LineGroup, &'static str, f64)];

// First matching style wins.
const STYLE_CRITERIA: &[(&[&str], Adjustments)] = &[
    (
        &["ofensivo", "ataque", "offensive", "attack"],
        &[
            (LineGroup::Defence, "min_short_passing", 75.0),
            (LineGroup::Defence, "min_ball_control", 70.0),
            (LineGroup::Midfield, "min_passing_total", 80.0),
            (LineGroup::Midfield, "min_vision", 80.0),
            (LineGroup::Midfield, "min_short_passing", 85.0),
            (LineGroup::Attack, "min_sprint_speed", 80.0),
            (LineGroup::Attack, "min_shooting_total", 80.0),
            (LineGroup::Attack, "min_agility", 80.0),
        ],
    ),
    (
        &["defensivo", "defensa", "defensive", "defence", "defense"],
        &[
            (LineGroup::Defence, "min_defending_total", 85.0),
            (LineGroup::Defence, "min_physicality_total", 80.0),
            (LineGroup::Defence, "min_interceptions", 80.0),
            (LineGroup::Midfield, "min_defending_total", 75.0),
            (LineGroup::Midfield, "min_physicality_total", 80.0),
            (LineGroup::Attack, "min_physicality_total", 75.0),
        ],
    ),
    (
        &["posesión", "posesion", "control", "possession"],
        &[
            (LineGroup::Defence, "min_ball_control", 80.0),
            (LineGroup::Defence, "min_short_passing", 85.0),
            (LineGroup::Midfield, "min_ball_control", 85.0),
            (LineGroup::Midfield, "min_short_passing", 90.0),
            (LineGroup::Midfield, "min_vision", 85.0),
            (LineGroup::Attack, "min_dribbling", 85.0),
            (LineGroup::Attack, "min_ball_control", 85.0),
        ],
    ),
];

const FORMATION_CRITERIA: &[(&str, Adjustments)] = &[
    (
        "4-3-3",
        &[
            (LineGroup::Midfield, "min_physicality_total", 80.0),
            (LineGroup::Attack, "min_sprint_speed", 85.0),
        ],
    ),
    ("4-4-2", &[(LineGroup::Midfield, "min_physicality_total", 85.0)]),
    (
        "3-5-2",
        &[
            (LineGroup::Defence, "min_positioning", 80.0),
            (LineGroup::Defence, "min_physicality_total", 85.0),
        ],
    ),
];

/// Criteria matching a described playing style and formation. Formation
/// adjustments are applied last and override style thresholds.
pub fn suggest_criteria(style: &str, formation: &str) -> Criteria {
    let mut criteria = Criteria::new();
    criteria
        .group_mut(LineGroup::Goalkeeper)
        .insert("min_overall", GOALKEEPER_MIN_OVERALL);

    let style = style.to_lowercase();

    let style_adjustments = STYLE_CRITERIA
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| style.contains(keyword)))
        .map(|(_, adjustments)| *adjustments);

    let formation_adjustments = FORMATION_CRITERIA
        .iter()
        .find(|(notation, _)| formation.contains(notation))
        .map(|(_, adjustments)| *adjustments);

    for adjustments in [style_adjustments, formation_adjustments].into_iter().flatten() {
        for (line, attribute, minimum) in adjustments {
            criteria.group_mut(*line).insert(*attribute, *minimum);
        }
    }

    criteria
}
