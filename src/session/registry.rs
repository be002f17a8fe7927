//! # Session Registry
//!
//! Maps opaque session tokens to their working dataset and expiry.
//!
//! ## Invariants
//! - SESS-1: each session's store is exclusively owned by that session.
//! - SESS-2: expiry is sliding: every access refreshes it to now + TTL.
//! - SESS-3: eviction is request-triggered: each access sweeps all *other*
//!   sessions and removes the expired ones. No background timers.
//!
//! The registry map is guarded by its own narrow `std::sync::Mutex`, never
//! held across an await. Per-session data sits behind a `tokio::sync::Mutex`
//! so one session's in-flight request (including its simulated delay, which
//! is awaited with no lock held) cannot stall other sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex as AsyncMutex;

use crate::store::{Record, RecordStore};

/// Default session lifetime: 2 hours from last access
pub const DEFAULT_TTL_SECS: i64 = 7200;

/// Handle to one session's serialized store
pub type SharedStore = Arc<AsyncMutex<RecordStore>>;

struct SessionEntry {
    store: SharedStore,
    expires_at: DateTime<Utc>,
}

/// Registry of live sessions, seeded lazily from a shared template
pub struct SessionRegistry {
    template: Vec<Record>,
    ttl: Duration,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionRegistry {
    /// Create a registry with the default 2-hour TTL
    pub fn new(template: Vec<Record>) -> Self {
        Self::with_ttl(template, DEFAULT_TTL_SECS)
    }

    /// Create a registry with a custom TTL in seconds
    pub fn with_ttl(template: Vec<Record>, ttl_secs: i64) -> Self {
        Self {
            template,
            ttl: Duration::seconds(ttl_secs),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Return the session's store, creating and seeding it from the template
    /// if absent. Refreshes this session's expiry and sweeps expired others.
    ///
    /// Infallible: an unknown token is simply a fresh session.
    pub fn get_or_create(&self, token: &str) -> SharedStore {
        // A poisoned lock only means some request panicked while holding it;
        // the map itself is still consistent.
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now();
        sessions.retain(|tok, entry| tok == token || entry.expires_at > now);

        let entry = sessions
            .entry(token.to_string())
            .or_insert_with(|| SessionEntry {
                store: Arc::new(AsyncMutex::new(RecordStore::new(self.template.clone()))),
                expires_at: now,
            });
        entry.expires_at = now + self.ttl;

        Arc::clone(&entry.store)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no sessions are live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
