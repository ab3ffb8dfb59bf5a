use crate::handoff::token::generate_token_default;
use crate::handoff::Handoff;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

struct StoredHandoff {
    handoff: Arc<Handoff>,
    stored_at: DateTime<Utc>,
}

#[derive(Default)]
struct Slots {
    entries: HashMap<String, StoredHandoff>,
    // insertion order, oldest first
    order: VecDeque<String>,
}

/// In-memory handoff buffer shared by all worker threads.
///
/// Bounded by `capacity` (oldest entry goes first) and by `ttl`. Writes to
/// the same id replace the previous value.
#[derive(Clone)]
pub struct HandoffStore {
    slots: Arc<Mutex<Slots>>,
    capacity: usize,
    ttl: Duration,
}

impl HandoffStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots::default())),
            capacity: capacity.max(1),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        // A panicking writer leaves the maps consistent, so keep serving.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a handoff under a fresh id and return the id.
    pub fn put(&self, handoff: Handoff) -> String {
        self.put_at(handoff, Utc::now())
    }

    pub fn put_at(&self, handoff: Handoff, now: DateTime<Utc>) -> String {
        let id = generate_token_default();
        self.insert_at(id.clone(), handoff, now);
        id
    }

    pub fn insert_at(&self, id: String, handoff: Handoff, now: DateTime<Utc>) {
        let mut slots = self.lock();

        if slots.entries.contains_key(&id) {
            slots.order.retain(|existing| existing != &id);
        }

        while slots.entries.len() >= self.capacity {
            let Some(oldest) = slots.order.pop_front() else {
                break;
            };
            slots.entries.remove(&oldest);
            debug!(handoff = %oldest, "evicted handoff at capacity");
        }

        slots.order.push_back(id.clone());
        slots.entries.insert(
            id,
            StoredHandoff {
                handoff: Arc::new(handoff),
                stored_at: now,
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<Arc<Handoff>> {
        self.get_at(id, Utc::now())
    }

    /// Expired entries are dropped on read.
    pub fn get_at(&self, id: &str, now: DateTime<Utc>) -> Option<Arc<Handoff>> {
        let mut slots = self.lock();

        let expired = match slots.entries.get(id) {
            Some(stored) if now - stored.stored_at <= self.ttl => {
                return Some(Arc::clone(&stored.handoff));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            slots.entries.remove(id);
            slots.order.retain(|existing| existing != id);
            debug!(handoff = %id, "handoff expired");
        }
        None
    }

    /// Returns whether something was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut slots = self.lock();
        let removed = slots.entries.remove(id).is_some();
        if removed {
            slots.order.retain(|existing| existing != id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }
}
