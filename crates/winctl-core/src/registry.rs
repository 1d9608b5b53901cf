//! Optional snapshot cache.
//!
//! The OS is the source of truth for every window. The registry only saves
//! repeated native calls for snapshots that are still valid, and its
//! contract is "verify `exists()` before trusting a cached entry". There is
//! no TTL: entries live until they are invalidated, pruned, or found dead.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{WindowHandle, WindowSnapshot};

#[derive(Debug, Default)]
pub struct Registry {
    entries: RefCell<HashMap<WindowHandle, WindowSnapshot>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot for `handle` if `is_live` confirms the
    /// window still exists.
    ///
    /// A dead handle's entry is evicted.
    pub fn get(
        &self,
        handle: WindowHandle,
        is_live: impl FnOnce(WindowHandle) -> bool,
    ) -> Option<WindowSnapshot> {
        let mut entries = self.entries.borrow_mut();
        let cached = entries.get(&handle)?;

        if is_live(handle) {
            Some(cached.clone())
        } else {
            entries.remove(&handle);
            None
        }
    }

    /// Stores (or replaces) the snapshot for its handle.
    pub fn insert(&self, snapshot: WindowSnapshot) {
        self.entries.borrow_mut().insert(snapshot.handle, snapshot);
    }

    /// Drops the entry for `handle`. Returns whether one was cached.
    pub fn invalidate(&self, handle: WindowHandle) -> bool {
        self.entries.borrow_mut().remove(&handle).is_some()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Evicts every entry whose window is gone. Returns how many were removed.
    pub fn prune(&self, is_live: impl Fn(WindowHandle) -> bool) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|handle, _| is_live(*handle));
        before - entries.len()
    }

    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.entries.borrow().contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimensions;

    fn snapshot(raw: usize, title: &str) -> WindowSnapshot {
        WindowSnapshot {
            handle: WindowHandle::from_raw(raw),
            title: title.into(),
            class_name: "Notepad".into(),
            pid: 42,
            parent: WindowHandle::NULL,
            visible: true,
            dimensions: Dimensions::default(),
        }
    }

    #[test]
    fn live_entry_is_returned() {
        let registry = Registry::new();
        registry.insert(snapshot(1, "a"));

        let cached = registry.get(WindowHandle::from_raw(1), |_| true);

        assert_eq!(cached.map(|s| s.title), Some("a".to_string()));
    }

    #[test]
    fn dead_entry_is_evicted_on_access() {
        let registry = Registry::new();
        registry.insert(snapshot(1, "a"));

        let cached = registry.get(WindowHandle::from_raw(1), |_| false);

        assert!(cached.is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_entry_does_not_query_liveness() {
        let registry = Registry::new();

        let cached = registry.get(WindowHandle::from_raw(7), |_| {
            panic!("liveness should not be checked for a cache miss")
        });

        assert!(cached.is_none());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let registry = Registry::new();
        registry.insert(snapshot(1, "old"));
        registry.insert(snapshot(1, "new"));

        let cached = registry.get(WindowHandle::from_raw(1), |_| true).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(cached.title, "new");
    }

    #[test]
    fn prune_removes_only_dead_entries() {
        let registry = Registry::new();
        for raw in 1..=4 {
            registry.insert(snapshot(raw, "w"));
        }

        let removed = registry.prune(|h| h.raw() % 2 == 0);

        assert_eq!(removed, 2);
        assert!(registry.contains(WindowHandle::from_raw(2)));
        assert!(!registry.contains(WindowHandle::from_raw(3)));
    }

    #[test]
    fn invalidate_reports_whether_entry_existed() {
        let registry = Registry::new();
        registry.insert(snapshot(1, "a"));

        assert!(registry.invalidate(WindowHandle::from_raw(1)));
        assert!(!registry.invalidate(WindowHandle::from_raw(1)));
    }
}
