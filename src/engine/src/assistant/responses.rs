use crate::assistant::Intent;
use crate::i18n::Language;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResponseKey {
    Greeting,
    TeamCreation,
    StyleReceived,
    FormationReceived,
    FormationWithoutStyle,
    RecommendPlayer,
    AskAttribute,
    Thanks,
    Rephrase,
}

impl From<Intent> for ResponseKey {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Greeting => ResponseKey::Greeting,
            Intent::TeamCreation => ResponseKey::TeamCreation,
            Intent::StyleDescription => ResponseKey::StyleReceived,
            Intent::FormationSpecification => ResponseKey::FormationReceived,
            Intent::PlayerInquiry => ResponseKey::RecommendPlayer,
            Intent::Thanks => ResponseKey::Thanks,
        }
    }
}

// (key, [(english, spanish)])
const RESPONSES: &[(ResponseKey, &[(&str, &str)])] = &[
    (
        ResponseKey::Greeting,
        &[
            (
                "Hi! I'm your assistant for building the ideal football team. How can I help you today?",
                "¡Hola! Soy tu asistente para formar equipos de fútbol ideal. ¿En qué puedo ayudarte hoy?",
            ),
            (
                "Welcome! I'm here to help you build your perfect football team. Where do we start?",
                "¡Bienvenido! Estoy aquí para ayudarte a crear tu equipo de fútbol perfecto. ¿Por dónde empezamos?",
            ),
        ],
    ),
    (
        ResponseKey::TeamCreation,
        &[
            (
                "Great decision! Let's build your ideal team. Could you describe the playing style you prefer? (for example: 'defensive team', 'attacking play', 'fast counter attack')",
                "¡Excelente decisión! Vamos a crear tu equipo ideal. ¿Podrías describirme el estilo de juego que prefieres? (por ejemplo: 'equipo defensivo', 'juego ofensivo', 'contraataque rápido')",
            ),
            (
                "Perfect, let's put your team together. First, what playing style would you like to use?",
                "Perfecto, vamos a armar tu equipo. Primero, dime ¿qué estilo de juego te gustaría implementar?",
            ),
        ],
    ),
    (
        ResponseKey::StyleReceived,
        &[
            (
                "Understood, you prefer a {style} playing style. Which formation would you like to use? (e.g. 4-3-3, 4-4-2, 3-5-2)",
                "Entendido, prefieres un estilo de juego {style}. ¿Qué formación te gustaría usar? (ej: 4-3-3, 4-4-2, 3-5-2)",
            ),
            (
                "Good choice! A {style} style can be very effective. Now tell me, which formation do you want to play?",
                "¡Buena elección! Un estilo {style} puede ser muy efectivo. Ahora dime, ¿con qué formación quieres jugar?",
            ),
        ],
    ),
    (
        ResponseKey::FormationReceived,
        &[
            (
                "Perfect! A {formation} formation for a {style} style. I'm generating your ideal team...",
                "¡Perfecto! Formación {formation} para un estilo {style}. Estoy generando tu equipo ideal...",
            ),
            (
                "Nice combination: {formation} with a {style} style. Let me find the right players...",
                "Buena combinación: {formation} con estilo {style}. Déjame encontrar los jugadores perfectos...",
            ),
        ],
    ),
    (
        ResponseKey::FormationWithoutStyle,
        &[(
            "Noted, {formation} it is. What playing style should the team have?",
            "Anotado, jugaremos con {formation}. ¿Qué estilo de juego debería tener el equipo?",
        )],
    ),
    (
        ResponseKey::RecommendPlayer,
        &[
            (
                "Based on your request I'd recommend {player}. Their {attribute} is {value}, which makes them ideal for what you need.",
                "Basado en tu solicitud, te recomendaría a {player}. Tiene un {attribute} de {value}, lo que lo hace ideal para lo que necesitas.",
            ),
            (
                "For that, {player} would be an excellent option with a {attribute} of {value}.",
                "Para eso, {player} sería una excelente opción con su {attribute} de {value}.",
            ),
        ],
    ),
    (
        ResponseKey::AskAttribute,
        &[(
            "Which attribute are you interested in? For example vision or dribbling.",
            "¿Qué atributo te interesa? Por ejemplo visión o regate.",
        )],
    ),
    (
        ResponseKey::Thanks,
        &[
            (
                "You're welcome! I'm here to help. Do you need anything else?",
                "¡De nada! Estoy aquí para ayudarte. ¿Necesitas algo más?",
            ),
            (
                "Happy to help! Would you like to adjust your team?",
                "¡Es un placer ayudarte! ¿Quieres hacer algún ajuste a tu equipo?",
            ),
        ],
    ),
    (
        ResponseKey::Rephrase,
        &[(
            "I'm not sure I understand. Could you rephrase or tell me more about what you need?",
            "No estoy seguro de entenderte. ¿Podrías reformular tu pregunta o decirme más sobre lo que necesitas?",
        )],
    ),
];

/// Picks a template by rotating through the variants with `turn` and
/// substitutes `{name}` placeholders.
pub fn render(key: ResponseKey, language: Language, turn: usize, values: &[(&str, &str)]) -> String {
    let variants = RESPONSES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, variants)| *variants)
        .unwrap_or_default();

    if variants.is_empty() {
        return String::new();
    }

    let (english, spanish) = variants[turn % variants.len()];
    let mut response = language.pick(english, spanish).to_string();

    for (name, value) in values {
        response = response.replace(&format!("{{{}}}", name), value);
    }

    response
}
