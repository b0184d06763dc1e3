pub mod assistant;
pub mod i18n;
pub mod player;
pub mod pool;
pub mod scoring;
pub mod selection;
pub mod tactics;

pub use assistant::{
    Assistant, ChatReply, ConversationSession, ConversationStage, Intent, IntentMatch,
    IntentMatcher, LexicalMatcher, SessionStore, TeamDraft, suggest_criteria,
};
pub use i18n::Language;
pub use player::{Column, PlayerAttributes, PlayerRecord, PlayerRecordBuilder, PositionTag};
pub use pool::{PlayerPool, PlayerTable, SchemaError, ScoredPlayer};
pub use scoring::{Archetype, CompositeScores, ScoringPreprocessor};
pub use selection::{
    Criteria, GroupCriteria, Lineup, LineupPlayer, PlayerSelector, Selection, TeamAnalyzer,
    TeamRecommender, TeamStrength,
};
pub use tactics::{Formation, LineCounts, LineGroup, Slot, SlotDeriver};
