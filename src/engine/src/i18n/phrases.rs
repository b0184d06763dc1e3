use crate::i18n::Language;
use crate::tactics::Slot;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phrase {
    TeamAnalysis,
    Goalkeeper,
    NotSelected,
    Defenders,
    Midfielders,
    Attackers,
    TeamStrengths,
    SolidGoalkeeping,
    ConsistentDefence,
    CompetitiveMidfield,
    DangerousAttack,
    NoTeamGenerated,
    GoalkeeperReason,
    CentreBackReason,
    FullBackReason,
    CentralMidfielderReason,
    MidfielderReason,
    ForwardReason,
}

// (phrase, english, spanish)
const PHRASES: &[(Phrase, &str, &str)] = &[
    (Phrase::TeamAnalysis, "Team analysis:", "Análisis del equipo:"),
    (Phrase::Goalkeeper, "Goalkeeper", "Portero"),
    (Phrase::NotSelected, "Not selected", "No seleccionado"),
    (Phrase::Defenders, "Defenders", "Defensas"),
    (Phrase::Midfielders, "Midfielders", "Mediocampistas"),
    (Phrase::Attackers, "Attackers", "Atacantes"),
    (Phrase::TeamStrengths, "Team strengths", "Fortalezas del equipo"),
    (Phrase::SolidGoalkeeping, "Solid goalkeeping", "Portería sólida"),
    (Phrase::ConsistentDefence, "Consistent defense", "Defensa consistente"),
    (Phrase::CompetitiveMidfield, "Competitive midfield", "Mediocampo competitivo"),
    (Phrase::DangerousAttack, "Dangerous attack", "Ataque peligroso"),
    (
        Phrase::NoTeamGenerated,
        "Could not generate a team with the given criteria",
        "No se pudo generar el equipo con los criterios dados",
    ),
    (
        Phrase::GoalkeeperReason,
        "Best available goalkeeper (GK Score: {score}) with {overall} overall",
        "Mejor portero disponible (GK Score: {score}) con {overall} de overall",
    ),
    (
        Phrase::CentreBackReason,
        "{role} (CB Score: {score}) with good potential and defensive skills",
        "{role} (CB Score: {score}) con buen potencial y habilidades defensivas",
    ),
    (
        Phrase::FullBackReason,
        "{role} ({code}, FB Score: {score}) with pace and two-way ability",
        "{role} ({code}, FB Score: {score}) con velocidad y habilidad ofensiva/defensiva",
    ),
    (
        Phrase::CentralMidfielderReason,
        "{role} (CM Score: {score}) balancing attack and defense",
        "{role} (CM Score: {score}) con equilibrio entre ataque y defensa",
    ),
    (
        Phrase::MidfielderReason,
        "{role} (CAM/CDM Score: {score}) with a complete skill set",
        "{role} (CAM/CDM Score: {score}) con habilidades completas",
    ),
    (
        Phrase::ForwardReason,
        "{role} (ST Score: {score}) with complete attacking skills",
        "{role} (ST Score: {score}) con habilidades ofensivas completas",
    ),
];

// (slot, english, spanish)
const ROLE_LABELS: &[(Slot, &str, &str)] = &[
    (Slot::Goalkeeper, "Goalkeeper", "Portero"),
    (Slot::CentreBack, "Centre-back", "Central"),
    (Slot::FullBack, "Full-back", "Lateral"),
    (Slot::CentralMidfielder, "Central midfielder", "Mediocentro"),
    (Slot::AttackingMidfielder, "Attacking midfielder", "Mediocentro ofensivo"),
    (Slot::DefensiveMidfielder, "Defensive midfielder", "Mediocentro defensivo"),
    (Slot::RightMidfielder, "Right midfielder", "Interior derecho"),
    (Slot::LeftMidfielder, "Left midfielder", "Interior izquierdo"),
    (Slot::Striker, "Striker", "Delantero centro"),
    (Slot::LeftWinger, "Left winger", "Extremo izquierdo"),
    (Slot::RightWinger, "Right winger", "Extremo derecho"),
];

impl Language {
    pub fn phrase(&self, phrase: Phrase) -> &'static str {
        PHRASES
            .iter()
            .find(|(key, _, _)| *key == phrase)
            .map(|(_, english, spanish)| self.pick(english, spanish))
            .unwrap_or_default()
    }

    /// Human readable role for a slot, e.g. "Extremo izquierdo" for `LW`.
    pub fn role(&self, slot: Slot) -> &'static str {
        ROLE_LABELS
            .iter()
            .find(|(key, _, _)| *key == slot)
            .map(|(_, english, spanish)| self.pick(english, spanish))
            .unwrap_or_else(|| slot.code())
    }

    pub(crate) fn pick(&self, english: &'static str, spanish: &'static str) -> &'static str {
        match self {
            Language::English => english,
            Language::Spanish => spanish,
        }
    }
}
