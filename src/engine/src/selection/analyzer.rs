use crate::i18n::{Language, Phrase};
use crate::selection::LineupPlayer;
use crate::tactics::{LineGroup, Slot};
use itertools::Itertools;

const STRONG_OVERALL: u32 = 75;
const STRONG_LINE_PLAYERS: usize = 2;

/// Slots that count towards a line's strength. Wide midfielders do not.
const STRENGTH_SLOTS: &[(TeamStrength, &[Slot])] = &[
    (
        TeamStrength::ConsistentDefence,
        &[Slot::CentreBack, Slot::FullBack],
    ),
    (
        TeamStrength::CompetitiveMidfield,
        &[
            Slot::CentralMidfielder,
            Slot::AttackingMidfielder,
            Slot::DefensiveMidfielder,
        ],
    ),
    (
        TeamStrength::DangerousAttack,
        &[Slot::Striker, Slot::LeftWinger, Slot::RightWinger],
    ),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TeamStrength {
    SolidGoalkeeping,
    ConsistentDefence,
    CompetitiveMidfield,
    DangerousAttack,
}

impl TeamStrength {
    pub fn phrase(&self) -> Phrase {
        match self {
            TeamStrength::SolidGoalkeeping => Phrase::SolidGoalkeeping,
            TeamStrength::ConsistentDefence => Phrase::ConsistentDefence,
            TeamStrength::CompetitiveMidfield => Phrase::CompetitiveMidfield,
            TeamStrength::DangerousAttack => Phrase::DangerousAttack,
        }
    }
}

pub struct TeamAnalyzer;

impl TeamAnalyzer {
    pub fn analyze(players: &[LineupPlayer], language: Language) -> String {
        let mut analysis = format!("{}\n", language.phrase(Phrase::TeamAnalysis));

        let goalkeeper = players
            .iter()
            .find(|player| player.position == Slot::Goalkeeper)
            .map(|player| player.name.as_str())
            .unwrap_or(language.phrase(Phrase::NotSelected));

        analysis.push_str(&format!(
            "- {}: {}\n",
            language.phrase(Phrase::Goalkeeper),
            goalkeeper
        ));

        let lines = [
            (LineGroup::Defence, Phrase::Defenders),
            (LineGroup::Midfield, Phrase::Midfielders),
            (LineGroup::Attack, Phrase::Attackers),
        ];

        for (line, phrase) in lines {
            let members = Self::line(players, line);
            if members.is_empty() {
                continue;
            }

            analysis.push_str(&format!(
                "- {} ({}): {}\n",
                language.phrase(phrase),
                members.len(),
                members.iter().map(|player| player.name.as_str()).join(", ")
            ));
        }

        let strengths = Self::strengths(players);
        if !strengths.is_empty() {
            analysis.push_str(&format!(
                "\n{}: {}\n",
                language.phrase(Phrase::TeamStrengths),
                strengths
                    .iter()
                    .map(|strength| language.phrase(strength.phrase()))
                    .join(", ")
            ));
        }

        analysis
    }

    pub fn strengths(players: &[LineupPlayer]) -> Vec<TeamStrength> {
        let mut strengths = Vec::new();

        let goalkeepers = Self::line(players, LineGroup::Goalkeeper);
        if !goalkeepers.is_empty() {
            let average = goalkeepers.iter().map(|p| p.overall as f64).sum::<f64>()
                / goalkeepers.len() as f64;

            if average > STRONG_OVERALL as f64 {
                strengths.push(TeamStrength::SolidGoalkeeping);
            }
        }

        for (strength, slots) in STRENGTH_SLOTS {
            let strong = players
                .iter()
                .filter(|player| slots.contains(&player.position))
                .filter(|player| player.overall > STRONG_OVERALL)
                .count();

            if strong >= STRONG_LINE_PLAYERS {
                strengths.push(*strength);
            }
        }

        strengths
    }

    fn line(players: &[LineupPlayer], line: LineGroup) -> Vec<&LineupPlayer> {
        players
            .iter()
            .filter(|player| player.position.line() == line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, position: Slot, overall: u32) -> LineupPlayer {
        LineupPlayer {
            id,
            name: format!("Player {}", id),
            position,
            overall,
            value: 0.0,
            nationality: "Spain".to_string(),
            selection_reason: String::new(),
        }
    }

    #[test]
    fn test_goalkeeping_and_defence_strengths() {
        let players = vec![
            player(1, Slot::Goalkeeper, 90),
            player(2, Slot::CentreBack, 80),
            player(3, Slot::FullBack, 82),
        ];

        assert_eq!(
            TeamAnalyzer::strengths(&players),
            vec![TeamStrength::SolidGoalkeeping, TeamStrength::ConsistentDefence]
        );

        let analysis = TeamAnalyzer::analyze(&players, Language::English);
        assert!(analysis.contains("Solid goalkeeping"));
        assert!(analysis.contains("Consistent defense"));
        assert!(analysis.contains("- Goalkeeper: Player 1"));
        assert!(analysis.contains("- Defenders (2): Player 2, Player 3"));
    }

    #[test]
    fn test_missing_goalkeeper_omits_goalkeeping() {
        let players = vec![
            player(2, Slot::CentreBack, 80),
            player(3, Slot::CentreBack, 82),
        ];

        let strengths = TeamAnalyzer::strengths(&players);
        assert!(!strengths.contains(&TeamStrength::SolidGoalkeeping));

        let analysis = TeamAnalyzer::analyze(&players, Language::Spanish);
        assert!(analysis.contains("- Portero: No seleccionado"));
        assert!(!analysis.contains("Portería sólida"));
        assert!(analysis.contains("Defensa consistente"));
    }

    #[test]
    fn test_line_strength_needs_two_strong_players() {
        let players = vec![
            player(1, Slot::Goalkeeper, 75),
            player(4, Slot::CentralMidfielder, 80),
            player(5, Slot::AttackingMidfielder, 76),
            player(6, Slot::Striker, 90),
            player(7, Slot::LeftWinger, 75),
        ];

        assert_eq!(
            TeamAnalyzer::strengths(&players),
            vec![TeamStrength::CompetitiveMidfield]
        );
    }

    #[test]
    fn test_wide_midfielders_do_not_count_towards_midfield_strength() {
        let players = vec![
            player(4, Slot::CentralMidfielder, 80),
            player(5, Slot::RightMidfielder, 88),
            player(6, Slot::LeftMidfielder, 86),
        ];

        assert!(TeamAnalyzer::strengths(&players).is_empty());

        let analysis = TeamAnalyzer::analyze(&players, Language::English);
        assert!(analysis.contains("- Midfielders (3): Player 4, Player 5, Player 6"));
        assert!(!analysis.contains("Competitive midfield"));
    }

    #[test]
    fn test_analysis_without_strengths() {
        let players = vec![player(6, Slot::Striker, 60)];
        let analysis = TeamAnalyzer::analyze(&players, Language::English);

        assert_eq!(
            analysis,
            "Team analysis:\n- Goalkeeper: Not selected\n- Attackers (1): Player 6\n"
        );
    }
}
