use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    #[default]
    Idle,
    AwaitingStyle,
    AwaitingFormation,
    Ready,
}

/// Conversation state of one user.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub id: String,
    pub stage: ConversationStage,
    pub style: Option<String>,
    pub formation: Option<String>,
    pub turns: usize,
    pub last_activity: DateTime<Utc>,
}

impl ConversationSession {
    pub fn new(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        ConversationSession {
            id: id.into(),
            stage: ConversationStage::Idle,
            style: None,
            formation: None,
            turns: 0,
            last_activity: now,
        }
    }

    /// Forgets style and formation and waits for a style.
    pub fn restart(&mut self) {
        self.style = None;
        self.formation = None;
        self.stage = ConversationStage::AwaitingStyle;
    }

    pub fn is_ready(&self) -> bool {
        self.stage == ConversationStage::Ready
    }

    pub fn is_idle_since(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_activity > ttl
    }
}

pub struct SessionStore {
    sessions: HashMap<String, ConversationSession>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Session for `id`, created on first use and stamped with `now`.
    pub fn session(&mut self, id: &str, now: DateTime<Utc>) -> &mut ConversationSession {
        let session = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| ConversationSession::new(id, now));

        session.last_activity = now;
        session
    }

    pub fn get(&self, id: &str) -> Option<&ConversationSession> {
        self.sessions.get(id)
    }

    /// Drops sessions inactive for longer than the ttl, returns how many were dropped.
    pub fn evict_idle(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.sessions.len();

        self.sessions
            .retain(|_, session| !session.is_idle_since(now, ttl));

        let evicted = before - self.sessions.len();
        if evicted > 0 {
            debug!("evicted {} idle chat sessions", evicted);
        }

        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_created_on_first_use() {
        let mut store = SessionStore::new(Duration::minutes(30));
        let now = Utc::now();

        assert!(store.get("u1").is_none());

        let session = store.session("u1", now);
        assert_eq!(session.stage, ConversationStage::Idle);
        session.turns += 1;

        assert_eq!(store.session("u1", now).turns, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_evict_idle_sessions() {
        let mut store = SessionStore::new(Duration::minutes(30));
        let start = Utc::now();

        store.session("old", start);
        store.session("recent", start + Duration::minutes(20));

        assert_eq!(store.evict_idle(start + Duration::minutes(31)), 1);
        assert!(store.get("old").is_none());
        assert!(store.get("recent").is_some());

        assert_eq!(store.evict_idle(start + Duration::minutes(40)), 0);
        assert_eq!(store.evict_idle(start + Duration::minutes(51)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restart_clears_context() {
        let mut session = ConversationSession::new("u1", Utc::now());
        session.style = Some("defensive".to_string());
        session.formation = Some("5-3-2".to_string());
        session.stage = ConversationStage::Ready;

        session.restart();

        assert_eq!(session.stage, ConversationStage::AwaitingStyle);
        assert!(session.style.is_none());
        assert!(session.formation.is_none());
        assert!(!session.is_ready());
    }
}
