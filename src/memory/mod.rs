//! Conversation memory for the chat feature.
//!
//! Each chat session owns a [`ConversationBuffer`], a bounded ring of the
//! most recent turns. Buffers live in a [`SessionStore`] keyed by the
//! caller-supplied session identifier, so concurrent users never share
//! history. The store tracks per-session activity and evicts the
//! least-recently-active session once [`MAX_SESSIONS`] is reached.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use parking_lot::RwLock;

use crate::types::{ChatTurn, TurnRole};

/// Number of trailing turns read back into the chat prompt.
pub const HISTORY_WINDOW: usize = 10;

/// Ring bound enforced at append time; oldest turns drop first.
pub const MAX_TURNS_PER_SESSION: usize = 50;

/// Maximum concurrently retained sessions before LRU eviction.
pub const MAX_SESSIONS: usize = 256;

// ============================================================================
// Conversation Buffer
// ============================================================================

/// Ordered ring of chat turns for a single session.
#[derive(Debug, Default)]
pub struct ConversationBuffer {
    turns: VecDeque<ChatTurn>,
}

impl ConversationBuffer {
    /// Append a turn, dropping the oldest once the ring is full.
    pub fn push(&mut self, role: TurnRole, content: impl Into<String>) {
        if self.turns.len() == MAX_TURNS_PER_SESSION {
            self.turns.pop_front();
        }
        self.turns.push_back(ChatTurn {
            role,
            content: content.into(),
        });
    }

    /// The trailing `n` turns in chronological order.
    pub fn recent(&self, n: usize) -> Vec<ChatTurn> {
        let skip = self.turns.len().saturating_sub(n);
        self.turns.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

// ============================================================================
// Session Store
// ============================================================================

/// A session's buffer plus the activity timestamp used for eviction.
#[derive(Debug)]
struct SessionEntry {
    buffer: ConversationBuffer,
    last_active: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            buffer: ConversationBuffer::default(),
            last_active: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }
}

/// Thread-safe store of per-session conversation buffers.
///
/// Reads and writes both refresh a session's activity, so eviction removes
/// the session that has gone longest without a chat request.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Create a store with the default session cap.
    pub fn with_defaults() -> Self {
        Self::new(MAX_SESSIONS)
    }

    /// Append a turn to a session's buffer, creating the session on first use.
    pub fn append_turn(&self, session_id: &str, role: TurnRole, content: &str) {
        let mut sessions = self.sessions.write();

        if !sessions.contains_key(session_id) && sessions.len() >= self.max_sessions {
            Self::evict_least_recent(&mut sessions);
        }

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionEntry::new);
        entry.buffer.push(role, content);
        entry.touch();
    }

    /// The trailing `n` turns of a session; empty for an unknown session.
    pub fn recent(&self, session_id: &str, n: usize) -> Vec<ChatTurn> {
        let mut sessions = self.sessions.write();
        match sessions.get_mut(session_id) {
            Some(entry) => {
                entry.touch();
                entry.buffer.recent(n)
            }
            None => Vec::new(),
        }
    }

    /// Drop a single session. Returns whether it existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    /// Drop every session.
    pub fn clear_all(&self) {
        self.sessions.write().clear();
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    fn evict_least_recent(sessions: &mut HashMap<String, SessionEntry>) {
        let stale = sessions
            .iter()
            .min_by_key(|(_, entry)| entry.last_active)
            .map(|(id, _)| id.clone());

        if let Some(id) = stale {
            tracing::debug!(session_id = %id, "evicting least-recently-active chat session");
            sessions.remove(&id);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_returns_last_ten_in_order() {
        let mut buffer = ConversationBuffer::default();
        for i in 0..12 {
            buffer.push(TurnRole::User, format!("message {}", i));
        }

        let recent = buffer.recent(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].content, "message 2");
        assert_eq!(recent[9].content, "message 11");
    }

    #[test]
    fn test_recent_on_short_buffer_returns_everything() {
        let mut buffer = ConversationBuffer::default();
        buffer.push(TurnRole::User, "hello");
        buffer.push(TurnRole::Assistant, "hi there");

        let recent = buffer.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].role, TurnRole::User);
        assert_eq!(recent[1].role, TurnRole::Assistant);
    }

    #[test]
    fn test_ring_bound_enforced_at_append() {
        let mut buffer = ConversationBuffer::default();
        for i in 0..(MAX_TURNS_PER_SESSION + 5) {
            buffer.push(TurnRole::User, format!("message {}", i));
        }

        assert_eq!(buffer.len(), MAX_TURNS_PER_SESSION);
        // The five oldest turns were dropped.
        assert_eq!(buffer.recent(MAX_TURNS_PER_SESSION)[0].content, "message 5");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut buffer = ConversationBuffer::default();
        buffer.push(TurnRole::User, "hello");
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.recent(10).is_empty());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::with_defaults();
        store.append_turn("alice", TurnRole::User, "alice's question");
        store.append_turn("bob", TurnRole::User, "bob's question");

        let alice = store.recent("alice", 10);
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].content, "alice's question");

        let bob = store.recent("bob", 10);
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].content, "bob's question");
    }

    #[test]
    fn test_unknown_session_reads_empty() {
        let store = SessionStore::with_defaults();
        assert!(store.recent("nobody", 10).is_empty());
    }

    #[test]
    fn test_clear_single_session() {
        let store = SessionStore::with_defaults();
        store.append_turn("alice", TurnRole::User, "hello");
        store.append_turn("bob", TurnRole::User, "hello");

        assert!(store.clear("alice"));
        assert!(!store.clear("alice"));
        assert!(store.recent("alice", 10).is_empty());
        assert_eq!(store.recent("bob", 10).len(), 1);
    }

    #[test]
    fn test_clear_all_sessions() {
        let store = SessionStore::with_defaults();
        store.append_turn("alice", TurnRole::User, "hello");
        store.append_turn("bob", TurnRole::User, "hello");

        store.clear_all();
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_store_evicts_least_recently_active() {
        // Millisecond gaps keep the activity ordering unambiguous even on
        // coarse monotonic clocks.
        let tick = || std::thread::sleep(std::time::Duration::from_millis(2));

        let store = SessionStore::new(2);
        store.append_turn("first", TurnRole::User, "a");
        tick();
        store.append_turn("second", TurnRole::User, "b");
        tick();

        // Refresh "first" so "second" becomes the eviction candidate.
        store.recent("first", 10);
        tick();
        store.append_turn("third", TurnRole::User, "c");

        assert_eq!(store.session_count(), 2);
        assert!(!store.recent("first", 10).is_empty());
        assert!(store.recent("second", 10).is_empty());
        assert!(!store.recent("third", 10).is_empty());
    }
}
