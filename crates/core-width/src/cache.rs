//! Bounded memoization for version resolution.
//!
//! Resolution is pure for explicit tokens, so a token -> version map in
//! front of the resolver is safe. It is layered outside the core: the
//! resolver itself stays cache-agnostic and correctness never depends on
//! cache state. Environment-dependent tokens (`"auto"`) bypass the cache
//! entirely; a cached entry for them could pin a stale override value.

use crate::resolve::{AUTO, OverrideSource, Resolver};
use crate::version::VersionError;
use ahash::AHashMap;
use std::collections::VecDeque;

/// Token -> resolved-version map with FIFO eviction.
#[derive(Debug, Default)]
pub struct ResolveCache {
    capacity: usize,
    entries: AHashMap<String, &'static str>,
    order: VecDeque<String>,
}

impl ResolveCache {
    /// A zero capacity disables memoization without changing behavior.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: AHashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `token` through the cache. Errors are never memoized.
    pub fn resolve_with<S: OverrideSource>(
        &mut self,
        resolver: &Resolver<S>,
        token: &str,
    ) -> Result<&'static str, VersionError> {
        if token == AUTO || self.capacity == 0 {
            return resolver.resolve(token);
        }
        if let Some(&hit) = self.entries.get(token) {
            return Ok(hit);
        }
        let resolved = resolver.resolve(token)?;
        if self.entries.len() == self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.entries.remove(&oldest);
        }
        self.entries.insert(token.to_string(), resolved);
        self.order.push_back(token.to_string());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::FixedOverride;
    use pretty_assertions::assert_eq;

    fn resolver() -> Resolver<FixedOverride> {
        Resolver::new(FixedOverride::absent())
    }

    #[test]
    fn memoizes_explicit_tokens() {
        let mut cache = ResolveCache::new(8);
        assert_eq!(cache.resolve_with(&resolver(), "4.9.9").unwrap(), "4.1.0");
        assert_eq!(cache.len(), 1);
        // Second hit comes from the map and agrees with a fresh resolution.
        assert_eq!(cache.resolve_with(&resolver(), "4.9.9").unwrap(), "4.1.0");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn auto_bypasses_the_cache() {
        let mut cache = ResolveCache::new(8);
        let pinned = Resolver::new(FixedOverride::pinned("9.0.0"));
        assert_eq!(cache.resolve_with(&pinned, "auto").unwrap(), "9.0.0");
        assert!(cache.is_empty());
        // A different override source must be observed immediately.
        let repinned = Resolver::new(FixedOverride::pinned("8.0.0"));
        assert_eq!(cache.resolve_with(&repinned, "auto").unwrap(), "8.0.0");
        assert!(cache.is_empty());
    }

    #[test]
    fn evicts_oldest_entry_at_capacity() {
        let mut cache = ResolveCache::new(2);
        cache.resolve_with(&resolver(), "4.9.9").unwrap();
        cache.resolve_with(&resolver(), "8.0").unwrap();
        cache.resolve_with(&resolver(), "latest").unwrap();
        assert_eq!(cache.len(), 2);
        assert!(!cache.entries.contains_key("4.9.9"));
        assert!(cache.entries.contains_key("latest"));
    }

    #[test]
    fn errors_are_not_memoized() {
        let mut cache = ResolveCache::new(2);
        assert!(cache.resolve_with(&resolver(), "9.x").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_disables_memoization() {
        let mut cache = ResolveCache::new(0);
        assert_eq!(cache.resolve_with(&resolver(), "8.0").unwrap(), "8.0.0");
        assert!(cache.is_empty());
    }
}
