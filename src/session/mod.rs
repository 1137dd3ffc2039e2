//! Session-token context.
//!
//! One opaque token under one fixed key is the only persisted client state.
//! The store is an explicit object handed to the submitter and the guard,
//! not ambient module-level storage, so tests and alternative backends
//! (browser storage, keychain) slot in behind the trait.

use std::sync::Mutex;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::TOKEN_STORAGE_KEY;

/// Read/write/clear access to the single session-token slot.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SessionStore: Send + Sync {
    /// Currently stored token, if any.
    fn token(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn set_token(&self, token: &str);

    /// Drop the stored token.
    fn clear(&self);
}

/// In-memory implementation backing the single storage slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_token(&self, token: &str) {
        tracing::debug!(key = TOKEN_STORAGE_KEY, "session token stored");
        match self.slot.lock() {
            Ok(mut slot) => *slot = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn clear(&self) {
        tracing::debug!(key = TOKEN_STORAGE_KEY, "session token cleared");
        match self.slot.lock() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifecycle() {
        let store = MemoryStore::new();
        assert_eq!(store.token(), None);

        store.set_token("abc");
        assert_eq!(store.token(), Some("abc".to_string()));

        store.set_token("def");
        assert_eq!(store.token(), Some("def".to_string()));

        store.clear();
        assert_eq!(store.token(), None);
    }
}
