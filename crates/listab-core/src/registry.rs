//! Idempotent attachment registry.
//!
//! Maps element identity to whatever keeps a binding alive (for the browser,
//! an event listener guard). Ensuring an already-attached key does nothing,
//! so repeated structural-change notifications never stack listeners.
//! Removing an entry drops its binding.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct AttachRegistry<K, B> {
    bindings: HashMap<K, B>,
}

impl<K, B> Default for AttachRegistry<K, B> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, B> AttachRegistry<K, B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `key` unless it already is. Returns true if `make` ran.
    pub fn ensure(&mut self, key: K, make: impl FnOnce() -> B) -> bool {
        if self.bindings.contains_key(&key) {
            return false;
        }
        self.bindings.insert(key, make());
        true
    }

    /// Keep only the bindings for which `keep` returns true.
    ///
    /// Returns the number of bindings dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &B) -> bool) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|k, b| keep(k, b));
        before - self.bindings.len()
    }

    pub fn get(&self, key: &K) -> Option<&B> {
        self.bindings.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live instances, standing in for a listener guard.
    struct Guard(Rc<Cell<usize>>);

    impl Guard {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self(live.clone())
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let live = Rc::new(Cell::new(0));
        let mut registry = AttachRegistry::new();

        assert!(registry.ensure(1u32, || Guard::new(&live)));
        assert!(!registry.ensure(1u32, || Guard::new(&live)));
        assert!(!registry.ensure(1u32, || Guard::new(&live)));
        assert_eq!(registry.len(), 1);
        assert_eq!(live.get(), 1);

        assert!(registry.ensure(2u32, || Guard::new(&live)));
        assert_eq!(live.get(), 2);
    }

    #[test]
    fn test_retain_drops_bindings() {
        let live = Rc::new(Cell::new(0));
        let mut registry = AttachRegistry::new();
        for id in 0..4u32 {
            registry.ensure(id, || Guard::new(&live));
        }

        let dropped = registry.retain(|id, _| id % 2 == 1);
        assert_eq!(dropped, 2);
        assert!(registry.contains(&1));
        assert!(!registry.contains(&2));
        assert_eq!(live.get(), 2);

        assert_eq!(registry.retain(|_, _| false), 2);
        assert!(registry.is_empty());
        assert_eq!(live.get(), 0);
    }
}
