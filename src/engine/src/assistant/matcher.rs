use crate::assistant::{INTENTS, Intent};
use std::collections::HashMap;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.65;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub confidence: f64,
}

/// Classifies a free text message into one of the known intents.
pub trait IntentMatcher: Send + Sync {
    fn detect(&self, message: &str) -> Option<IntentMatch>;
}

type WordBag = HashMap<String, f64>;

/// Nearest pattern by cosine similarity of word counts.
pub struct LexicalMatcher {
    patterns: Vec<(Intent, WordBag)>,
    threshold: f64,
}

impl LexicalMatcher {
    pub fn new(threshold: f64) -> Self {
        let patterns = INTENTS
            .iter()
            .flat_map(|definition| {
                definition
                    .patterns
                    .iter()
                    .map(move |pattern| (definition.intent, Self::bag(pattern)))
            })
            .collect();

        LexicalMatcher {
            patterns,
            threshold,
        }
    }

    /// Lowercases and drops everything that is not a word character or whitespace.
    pub fn clean(message: &str) -> String {
        message
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect()
    }

    fn bag(text: &str) -> WordBag {
        let mut bag = WordBag::new();
        for word in Self::clean(text).split_whitespace() {
            *bag.entry(word.to_string()).or_insert(0.0) += 1.0;
        }
        bag
    }

    fn cosine(a: &WordBag, b: &WordBag) -> f64 {
        let dot: f64 = a
            .iter()
            .filter_map(|(word, count)| b.get(word).map(|other| count * other))
            .sum();

        let norm = |bag: &WordBag| bag.values().map(|v| v * v).sum::<f64>().sqrt();
        let denominator = norm(a) * norm(b);

        if denominator == 0.0 {
            0.0
        } else {
            dot / denominator
        }
    }
}

impl Default for LexicalMatcher {
    fn default() -> Self {
        LexicalMatcher::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl IntentMatcher for LexicalMatcher {
    fn detect(&self, message: &str) -> Option<IntentMatch> {
        let message = Self::bag(message);

        let mut best: Option<IntentMatch> = None;
        for (intent, pattern) in &self.patterns {
            let similarity = Self::cosine(&message, pattern);

            let improves = best.is_none_or(|current| similarity > current.confidence);
            if similarity > self.threshold && improves {
                best = Some(IntentMatch {
                    intent: *intent,
                    confidence: similarity,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(message: &str) -> Option<Intent> {
        LexicalMatcher::default().detect(message).map(|m| m.intent)
    }

    #[test]
    fn test_detects_exact_patterns() {
        assert_eq!(detect("Hola!"), Some(Intent::Greeting));
        assert_eq!(detect("Thanks"), Some(Intent::Thanks));
        assert_eq!(detect("4-3-3"), Some(Intent::FormationSpecification));
        assert_eq!(detect("Estilo ofensivo"), Some(Intent::StyleDescription));
    }

    #[test]
    fn test_detects_close_variants() {
        assert_eq!(detect("hola, quiero crear un equipo"), Some(Intent::TeamCreation));
        assert_eq!(detect("mejor jugador para vision"), Some(Intent::PlayerInquiry));
    }

    #[test]
    fn test_unrelated_message_has_no_intent() {
        assert_eq!(detect("juego vertical con mucha presión arriba"), None);
        assert_eq!(detect(""), None);
        assert_eq!(detect("!!!"), None);
    }

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(LexicalMatcher::clean("¿Qué TAL?"), "qué tal");
        assert_eq!(LexicalMatcher::clean("4-4-2"), "442");
    }
}
