mod intents;
mod matcher;
mod responses;
mod session;
mod suggest;

pub use intents::*;
pub use matcher::*;
pub use responses::*;
pub use session::*;
pub use suggest::*;

use crate::i18n::Language;
use crate::player::Column;
use crate::pool::PlayerPool;
use crate::selection::Criteria;
use crate::tactics::Formation;
use log::{debug, info};
use std::sync::Arc;

const ATTRIBUTE_ALIASES: &[(&str, Column)] = &[
    ("pace", Column::SprintSpeed),
    ("speed", Column::SprintSpeed),
    ("velocidad", Column::SprintSpeed),
    ("regate", Column::Dribbling),
    ("visión", Column::Vision),
    ("pase", Column::ShortPassing),
    ("passing", Column::PassingTotal),
    ("shooting", Column::ShootingTotal),
    ("tiro", Column::ShootingTotal),
    ("remate", Column::ShotPower),
    ("defending", Column::DefendingTotal),
    ("defensa", Column::DefendingTotal),
    ("physical", Column::PhysicalityTotal),
    ("físico", Column::PhysicalityTotal),
    ("salto", Column::Jumping),
    ("marcaje", Column::Marking),
    ("centros", Column::Crossing),
    ("agilidad", Column::Agility),
    ("altura", Column::Height),
    ("potencial", Column::Potential),
    ("penaltis", Column::Penalties),
    ("control", Column::BallControl),
    ("intercepciones", Column::Interceptions),
    ("posicionamiento", Column::Positioning),
];

/// Everything needed to generate the team a conversation settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraft {
    pub description: String,
    pub formation: String,
    pub criteria: Criteria,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub intent: Option<Intent>,
    pub stage: ConversationStage,
    pub draft: Option<TeamDraft>,
}

/// Scripted assistant walking a user from a playing style to a formation.
pub struct Assistant {
    matcher: Box<dyn IntentMatcher>,
    pool: Arc<PlayerPool>,
    language: Language,
}

impl Assistant {
    pub fn new(pool: Arc<PlayerPool>, language: Language) -> Self {
        Assistant {
            matcher: Box::new(LexicalMatcher::default()),
            pool,
            language,
        }
    }

    pub fn with_matcher(mut self, matcher: impl IntentMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn reply(&self, session: &mut ConversationSession, message: &str) -> ChatReply {
        let intent = self.matcher.detect(message).map(|detected| {
            debug!(
                "session {}: intent {:?} ({:.2})",
                session.id, detected.intent, detected.confidence
            );
            detected.intent
        });

        let turn = session.turns;
        session.turns += 1;

        let (response, draft) = match (intent, session.stage) {
            (Some(Intent::TeamCreation), _) => {
                session.restart();
                (self.render(ResponseKey::TeamCreation, turn, session), None)
            }
            (Some(Intent::StyleDescription), _) | (None, ConversationStage::AwaitingStyle) => {
                self.receive_style(session, message, turn)
            }
            (Some(Intent::FormationSpecification), _)
            | (None, ConversationStage::AwaitingFormation) => {
                self.receive_formation(session, message, turn)
            }
            (Some(Intent::PlayerInquiry), _) => (self.recommend_player(message, turn), None),
            (Some(intent), _) => (self.render(intent.into(), turn, session), None),
            (None, _) => (self.render(ResponseKey::Rephrase, turn, session), None),
        };

        ChatReply {
            response,
            intent,
            stage: session.stage,
            draft,
        }
    }

    fn receive_style(
        &self,
        session: &mut ConversationSession,
        message: &str,
        turn: usize,
    ) -> (String, Option<TeamDraft>) {
        session.style = Some(message.trim().to_string());

        if session.formation.is_some() {
            return self.ready(session, turn);
        }

        session.stage = ConversationStage::AwaitingFormation;
        (self.render(ResponseKey::StyleReceived, turn, session), None)
    }

    fn receive_formation(
        &self,
        session: &mut ConversationSession,
        message: &str,
        turn: usize,
    ) -> (String, Option<TeamDraft>) {
        let formation = Formation::find_in(message)
            .map(|formation| formation.notation().to_string())
            .unwrap_or_else(|| message.trim().to_string());

        session.formation = Some(formation);

        if session.style.is_some() {
            return self.ready(session, turn);
        }

        session.stage = ConversationStage::AwaitingStyle;
        (self.render(ResponseKey::FormationWithoutStyle, turn, session), None)
    }

    fn ready(&self, session: &mut ConversationSession, turn: usize) -> (String, Option<TeamDraft>) {
        session.stage = ConversationStage::Ready;

        let draft = match (&session.style, &session.formation) {
            (Some(style), Some(formation)) => {
                info!("session {}: ready to generate a {} team", session.id, formation);

                Some(TeamDraft {
                    description: style.clone(),
                    formation: formation.clone(),
                    criteria: suggest_criteria(style, formation),
                })
            }
            _ => None,
        };

        (self.render(ResponseKey::FormationReceived, turn, session), draft)
    }

    fn recommend_player(&self, message: &str, turn: usize) -> String {
        let recommendation = Self::attribute_in(message)
            .and_then(|column| self.pool.best_by(column).map(|player| (column, player)));

        match recommendation {
            Some((column, player)) => {
                let value = format!("{:.0}", player.record.numeric(column).unwrap_or_default());

                render(
                    ResponseKey::RecommendPlayer,
                    self.language,
                    turn,
                    &[
                        ("player", player.record.name.as_str()),
                        ("attribute", column.header()),
                        ("value", value.as_str()),
                    ],
                )
            }
            None => render(ResponseKey::AskAttribute, self.language, turn, &[]),
        }
    }

    /// First dataset attribute named in the message, two word names first.
    fn attribute_in(message: &str) -> Option<Column> {
        let cleaned = LexicalMatcher::clean(message);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let by_header = |name: &str| {
            Column::from_header(name)
                .filter(|column| column.is_numeric() && *column != Column::Id)
        };

        let pairs = words
            .windows(2)
            .find_map(|pair| by_header(&pair.join(" ")));

        pairs.or_else(|| {
            words.iter().find_map(|word| {
                ATTRIBUTE_ALIASES
                    .iter()
                    .find(|(alias, _)| alias == word)
                    .map(|(_, column)| *column)
                    .or_else(|| by_header(*word))
            })
        })
    }

    fn render(&self, key: ResponseKey, turn: usize, session: &ConversationSession) -> String {
        let style = session.style.as_deref().unwrap_or_default();
        let formation = session.formation.as_deref().unwrap_or_default();

        render(
            key,
            self.language,
            turn,
            &[("style", style), ("formation", formation)],
        )
    }
}
