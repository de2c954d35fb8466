use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

use super::Session;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

struct SessionEntry {
    session: Session,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            session: Session::new(),
            last_seen: now,
        }
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl
    }
}

/// In-process session storage.
///
/// Every session is isolated under its own random id. Sessions that have not been
/// touched for longer than the TTL are gone: lookups miss and the next purge drops them.
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start an empty session and return its id.
    pub fn create(&mut self) -> Uuid {
        self.create_at(Instant::now())
    }

    /// Look up a live session, refreshing its last access time.
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Session> {
        self.get_mut_at(id, Instant::now())
    }

    /// Resume the session behind `id`, or start a new one when `id` is missing,
    /// unknown or expired.
    pub fn get_or_create(&mut self, id: Option<Uuid>) -> (Uuid, &mut Session) {
        self.get_or_create_at(id, Instant::now())
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Session> {
        self.sessions.remove(id).map(|entry| entry.session)
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn create_at(&mut self, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionEntry::new(now));
        id
    }

    fn get_mut_at(&mut self, id: &Uuid, now: Instant) -> Option<&mut Session> {
        let ttl = self.ttl;
        if self.sessions.get(id)?.is_expired(now, ttl) {
            self.sessions.remove(id);
            return None;
        }

        let entry = self.sessions.get_mut(id)?;
        entry.last_seen = now;
        Some(&mut entry.session)
    }

    fn get_or_create_at(&mut self, id: Option<Uuid>, now: Instant) -> (Uuid, &mut Session) {
        let ttl = self.ttl;
        let live = id.filter(|id| {
            self.sessions
                .get(id)
                .is_some_and(|entry| !entry.is_expired(now, ttl))
        });

        if let (Some(stale), None) = (id, live) {
            self.sessions.remove(&stale);
        }

        let id = live.unwrap_or_else(Uuid::new_v4);
        let entry = self
            .sessions
            .entry(id)
            .or_insert_with(|| SessionEntry::new(now));
        entry.last_seen = now;
        (id, &mut entry.session)
    }

    fn purge_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !entry.is_expired(now, ttl));
        before - self.sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new(TTL);
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);

        store.get_mut(&a).unwrap().set("math_score", &5usize).unwrap();
        assert_eq!(store.get_mut(&b).unwrap().get("math_score", 0usize), 0);
        assert_eq!(store.get_mut(&a).unwrap().get("math_score", 0usize), 5);
    }

    #[test]
    fn test_get_or_create_resumes_known_session() {
        let mut store = SessionStore::new(TTL);
        let (id, session) = store.get_or_create(None);
        session.set("math_score", &2usize).unwrap();

        let (resumed, session) = store.get_or_create(Some(id));
        assert_eq!(resumed, id);
        assert_eq!(session.get("math_score", 0usize), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id_gets_fresh_session() {
        let mut store = SessionStore::new(TTL);
        let forged = Uuid::new_v4();
        let (id, session) = store.get_or_create(Some(forged));
        assert_ne!(id, forged);
        assert!(session.is_empty());
    }

    #[test]
    fn test_expired_session_is_gone() {
        let mut store = SessionStore::new(TTL);
        let start = Instant::now();
        let id = store.create_at(start);

        let later = start + TTL + Duration::from_secs(1);
        assert!(store.get_mut_at(&id, later).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_session_is_replaced() {
        let mut store = SessionStore::new(TTL);
        let start = Instant::now();
        let (id, session) = store.get_or_create_at(None, start);
        session.set("math_answers", "stale").unwrap();

        let later = start + TTL * 2;
        let (new_id, session) = store.get_or_create_at(Some(id), later);
        assert_ne!(new_id, id);
        assert!(!session.contains("math_answers"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_access_keeps_session_alive() {
        let mut store = SessionStore::new(TTL);
        let start = Instant::now();
        let id = store.create_at(start);

        let halfway = start + TTL / 2;
        assert!(store.get_mut_at(&id, halfway).is_some());

        let after_first_ttl = start + TTL + Duration::from_secs(1);
        assert!(store.get_mut_at(&id, after_first_ttl).is_some());
    }

    #[test]
    fn test_purge_expired() {
        let mut store = SessionStore::new(TTL);
        let start = Instant::now();
        store.create_at(start);
        store.create_at(start);
        let fresh = store.create_at(start + TTL);

        let removed = store.purge_expired_at(start + store.ttl() + Duration::from_secs(1));
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert!(store.remove(&fresh).is_some());
    }
}
