use crate::i18n::{Language, Phrase};
use crate::scoring::Archetype;
use crate::selection::{Selection, TeamAnalyzer};
use crate::tactics::Slot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub id: u32,
    pub name: String,
    pub position: Slot,
    pub overall: u32,
    pub value: f64,
    pub nationality: String,
    pub selection_reason: String,
}

impl LineupPlayer {
    pub fn from_selection(selection: &Selection, language: Language) -> Self {
        LineupPlayer {
            id: selection.player_id,
            name: selection.name.clone(),
            position: selection.slot,
            overall: selection.overall.max(0.0) as u32,
            value: selection.value_eur,
            nationality: selection.nationality.clone(),
            selection_reason: selection_reason(selection, language),
        }
    }
}

/// Recommended team, or the empty result when nothing could be selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub formation: String,
    pub description: String,
    pub players: Vec<LineupPlayer>,
    pub total_value: f64,
    pub avg_rating: f64,
    pub team_analysis: String,
}

impl Lineup {
    pub fn empty(formation: &str, description: &str, language: Language) -> Self {
        Lineup {
            formation: formation.to_string(),
            description: description.to_string(),
            players: Vec::new(),
            total_value: 0.0,
            avg_rating: 0.0,
            team_analysis: language.phrase(Phrase::NoTeamGenerated).to_string(),
        }
    }

    pub fn from_selections(
        selections: &[Selection],
        formation: &str,
        description: &str,
        language: Language,
    ) -> Self {
        if selections.is_empty() {
            return Lineup::empty(formation, description, language);
        }

        let total_value: f64 = selections.iter().map(|s| s.value_eur).sum();
        let avg_rating =
            selections.iter().map(|s| s.overall).sum::<f64>() / selections.len() as f64;

        let players: Vec<LineupPlayer> = selections
            .iter()
            .map(|selection| LineupPlayer::from_selection(selection, language))
            .collect();

        Lineup {
            formation: formation.to_string(),
            description: description.to_string(),
            team_analysis: TeamAnalyzer::analyze(&players, language),
            players,
            total_value,
            avg_rating: (avg_rating * 100.0).round() / 100.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player_in(&self, slot: Slot) -> Option<&LineupPlayer> {
        self.players.iter().find(|player| player.position == slot)
    }
}

fn selection_reason(selection: &Selection, language: Language) -> String {
    let phrase = match selection.slot.archetype() {
        Archetype::Goalkeeper => Phrase::GoalkeeperReason,
        Archetype::CentreBack => Phrase::CentreBackReason,
        Archetype::FullBack => Phrase::FullBackReason,
        Archetype::CentralMidfielder => Phrase::CentralMidfielderReason,
        Archetype::AttackingDefensiveMidfielder => Phrase::MidfielderReason,
        Archetype::Striker => Phrase::ForwardReason,
    };

    language
        .phrase(phrase)
        .replace("{role}", language.role(selection.slot))
        .replace("{code}", selection.slot.code())
        .replace("{score}", &format!("{:.2}", selection.score))
        .replace("{overall}", &format!("{:.0}", selection.overall))
}
