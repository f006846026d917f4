use std::sync::Arc;

use dashmap::DashMap;

use crate::model::EventInfo;

/// Session-scoped schedule cache, keyed by username so flipping
/// between compared people does not refetch. An explicit object handed
/// to whoever needs it, never module state; the whole eviction policy
/// is `clear` on logout, entries have no TTL because schedules barely
/// change within one login session.
pub struct ProfileCache {
    schedules: DashMap<String, Arc<Vec<EventInfo>>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self {
            schedules: DashMap::new(),
        }
    }

    pub fn get(&self, username: &str) -> Option<Arc<Vec<EventInfo>>> {
        self.schedules.get(username).map(|e| e.value().clone())
    }

    /// Gets the cached schedule, or runs `fetch` and caches its result.
    /// A failed fetch caches nothing, so the next call retries.
    pub fn get_or_insert_with<E>(
        &self,
        username: &str,
        fetch: impl FnOnce() -> Result<Vec<EventInfo>, E>,
    ) -> Result<Arc<Vec<EventInfo>>, E> {
        if let Some(events) = self.schedules.get(username) {
            return Ok(events.value().clone());
        }
        let events = Arc::new(fetch()?);
        self.schedules.insert(username.to_string(), events.clone());
        metrics::gauge!(crate::observability::CACHED_PROFILES).set(self.schedules.len() as f64);
        Ok(events)
    }

    pub fn insert(&self, username: &str, events: Vec<EventInfo>) -> Arc<Vec<EventInfo>> {
        let events = Arc::new(events);
        self.schedules.insert(username.to_string(), events.clone());
        metrics::gauge!(crate::observability::CACHED_PROFILES).set(self.schedules.len() as f64);
        events
    }

    /// Drops every entry. Called on logout.
    pub fn clear(&self) {
        self.schedules.clear();
        metrics::gauge!(crate::observability::CACHED_PROFILES).set(0.0);
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new()
    }
}
