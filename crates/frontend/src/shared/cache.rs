use leptos::prelude::*;
use std::collections::HashMap;

pub const NS_EMPLOYEE: &str = "employee";

/// Namespace invalidation counters.
///
/// Data screens subscribe to `epoch(ns)` inside an `Effect` and refetch when
/// it changes. Completing a bulk import bumps the "employee" namespace so the
/// list reloads without holding a reference to it.
#[derive(Clone, Copy)]
pub struct CacheService {
    epochs: RwSignal<HashMap<&'static str, u64>>,
}

impl CacheService {
    pub fn new() -> Self {
        Self {
            epochs: RwSignal::new(HashMap::new()),
        }
    }

    /// Reactive read: tracks the namespace counter.
    pub fn epoch(&self, ns: &'static str) -> u64 {
        self.epochs.with(|m| m.get(ns).copied().unwrap_or(0))
    }

    pub fn invalidate(&self, ns: &'static str) {
        self.epochs.update(|m| {
            *m.entry(ns).or_insert(0) += 1;
        });
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new()
    }
}
