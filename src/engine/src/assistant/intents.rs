use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    TeamCreation,
    StyleDescription,
    FormationSpecification,
    PlayerInquiry,
    Thanks,
}

#[derive(Debug)]
pub struct IntentDefinition {
    pub intent: Intent,
    pub patterns: &'static [&'static str],
}

pub const INTENTS: &[IntentDefinition] = &[
    IntentDefinition {
        intent: Intent::Greeting,
        patterns: &[
            "hola",
            "buenos días",
            "buenas tardes",
            "qué tal",
            "hi",
            "hello",
            "hey",
            "good morning",
        ],
    },
    IntentDefinition {
        intent: Intent::TeamCreation,
        patterns: &[
            "quiero crear un equipo",
            "formar un equipo ideal",
            "armar un equipo",
            "crear equipo de fútbol",
            "i want to create a team",
            "build my ideal team",
            "create a football team",
        ],
    },
    IntentDefinition {
        intent: Intent::StyleDescription,
        patterns: &[
            "estilo ofensivo",
            "juego defensivo",
            "contraataque",
            "posesión de balón",
            "alta presión",
            "offensive style",
            "defensive play",
            "counter attack",
            "ball possession",
            "high pressing",
        ],
    },
    IntentDefinition {
        intent: Intent::FormationSpecification,
        patterns: &["4-3-3", "4-4-2", "3-5-2", "3-4-3", "5-3-2", "4-5-1"],
    },
    IntentDefinition {
        intent: Intent::PlayerInquiry,
        patterns: &[
            "mejor jugador para",
            "quién es bueno en",
            "recomiéndame un",
            "jugador con",
            "best player for",
            "who is good at",
            "recommend me a player",
            "player with",
        ],
    },
    IntentDefinition {
        intent: Intent::Thanks,
        patterns: &["gracias", "muchas gracias", "thanks", "thank you"],
    },
];
