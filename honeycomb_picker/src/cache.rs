// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized geometry and invalidation tracking.

use core::fmt::Debug;

bitflags::bitflags! {
    /// What a configuration change invalidated.
    ///
    /// Pickers accumulate these as setters run; hosts drain them with
    /// `take_invalidation` to decide whether to schedule a repaint.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Cell centers or segment boundaries have to be recomputed.
        const GEOMETRY = 0b0000_0001;
        /// The raster hit map has to be rebuilt.
        const HIT_MAP  = 0b0000_0010;
        /// The widget has to be repainted.
        const REDRAW   = 0b0000_0100;
    }
}

impl Invalidation {
    /// Everything derived from size, radius, padding, or palette.
    pub const LAYOUT: Self = Self::GEOMETRY.union(Self::HIT_MAP).union(Self::REDRAW);
}

/// Hit and miss counters of a [`Memo`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that recomputed.
    pub misses: u64,
}

/// A single-entry cache keyed by the inputs it was computed from.
///
/// The value is recomputed lazily, on the first lookup whose key differs from
/// the stored one.
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    stats: CacheStats,
}

impl<K: Debug, V> Debug for Memo<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Memo")
            .field("key", &self.entry.as_ref().map(|(k, _)| k))
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Memo<K, V> {
    /// An empty cache.
    pub const fn new() -> Self {
        Self {
            entry: None,
            stats: CacheStats { hits: 0, misses: 0 },
        }
    }

    /// Drop the stored value.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Lookup counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<K: PartialEq + Debug, V> Memo<K, V> {
    /// The stored value, if it was computed for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((k, v)) if k == key => Some(v),
            _ => None,
        }
    }

    /// The value for `key`, computing it with `compute` on a miss.
    ///
    /// A failed computation leaves the cache empty.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        let entry = match self.entry.take() {
            Some((k, v)) if k == key => {
                self.stats.hits += 1;
                (k, v)
            }
            _ => {
                self.stats.misses += 1;
                log::debug!("geometry cache miss for {key:?}");
                let value = compute()?;
                (key, value)
            }
        };
        let (_, value) = self.entry.insert(entry);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_on_key_change() {
        let mut memo: Memo<u32, u32> = Memo::new();
        let mut calls = 0;
        let mut lookup = |memo: &mut Memo<u32, u32>, key: u32| -> u32 {
            *memo
                .get_or_try_insert_with(key, || {
                    calls += 1;
                    Ok::<_, ()>(key * 10)
                })
                .unwrap()
        };
        assert_eq!(lookup(&mut memo, 1), 10);
        assert_eq!(lookup(&mut memo, 1), 10);
        assert_eq!(lookup(&mut memo, 2), 20);
        assert_eq!(calls, 2);
        assert_eq!(memo.stats(), CacheStats { hits: 1, misses: 2 });
    }

    #[test]
    fn failures_leave_the_cache_empty() {
        let mut memo: Memo<u32, u32> = Memo::new();
        let _ = memo.get_or_try_insert_with(1, || Ok::<_, ()>(1));
        assert_eq!(memo.get(&1), Some(&1));
        assert_eq!(memo.get_or_try_insert_with(2, || Err("boom")), Err("boom"));
        assert_eq!(memo.get(&1), None);
        memo.clear();
        assert_eq!(memo.get(&2), None);
    }

    #[test]
    fn layout_invalidation_covers_everything() {
        assert!(Invalidation::LAYOUT.contains(Invalidation::GEOMETRY | Invalidation::HIT_MAP));
        assert!(Invalidation::LAYOUT.contains(Invalidation::REDRAW));
        assert!(Invalidation::default().is_empty());
    }
}
