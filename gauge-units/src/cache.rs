//! Identity-stable cache of derived units

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use gauge_core::Op;
use tracing::{debug, trace, warn};
use crate::combine::synthesize_with_base;
use crate::Unit;

/// Default size past which the cache logs a growth warning
pub const DEFAULT_WARN_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    op: Op,
    left: Unit,
    right: Unit,
}

/// Memoizes derived units by `(op, left, right)`.
///
/// Every call to [`combine`](Self::combine) with equal operands returns the
/// same unit instance for the lifetime of the cache. Entries are never
/// evicted. Concurrent callers racing on one key all receive the unit that
/// was inserted first.
pub struct DerivedUnitCache {
    units: RwLock<HashMap<CacheKey, Unit>>,
    warn_threshold: usize,
    warned: AtomicBool,
}

impl DerivedUnitCache {
    pub fn new() -> Self {
        Self::with_warn_threshold(DEFAULT_WARN_THRESHOLD)
    }

    /// Cache that logs a warning once it holds more than `threshold` units
    pub fn with_warn_threshold(threshold: usize) -> Self {
        Self {
            units: RwLock::new(HashMap::new()),
            warn_threshold: threshold,
            warned: AtomicBool::new(false),
        }
    }

    /// Get or create the derived unit for `left op right`
    pub fn combine(&self, op: Op, left: &Unit, right: &Unit) -> Unit {
        let key = CacheKey {
            op,
            left: left.clone(),
            right: right.clone(),
        };

        if let Some(unit) = self.read().get(&key) {
            trace!(%op, left = %left, right = %right, "derived unit cache hit");
            return unit.clone();
        }

        // Resolve the base first. No lock is held across the recursion.
        let base = if left.is_base() && right.is_base() {
            None
        } else {
            Some(self.combine(op, &left.base_unit(), &right.base_unit()))
        };
        let candidate = synthesize_with_base(op, left, right, base);

        let mut units = self.write();
        let unit = match units.entry(key) {
            Entry::Occupied(entry) => {
                trace!(unit = %entry.get(), "lost derived unit insert race");
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                debug!(unit = %candidate, dimension = %candidate.dimension(), "synthesized derived unit");
                entry.insert(candidate).clone()
            }
        };
        let len = units.len();
        drop(units);

        self.check_growth(len);
        unit
    }

    /// Look up a previously combined unit without creating one
    pub fn get(&self, op: Op, left: &Unit, right: &Unit) -> Option<Unit> {
        let key = CacheKey {
            op,
            left: left.clone(),
            right: right.clone(),
        };
        self.read().get(&key).cloned()
    }

    pub fn contains(&self, op: Op, left: &Unit, right: &Unit) -> bool {
        self.get(op, left, right).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn warn_threshold(&self) -> usize {
        self.warn_threshold
    }

    fn check_growth(&self, len: usize) {
        if len > self.warn_threshold && !self.warned.swap(true, Ordering::Relaxed) {
            warn!(
                len,
                threshold = self.warn_threshold,
                "derived unit cache is unusually large; units may be built per call instead of declared once"
            );
        }
    }

    // The map is insert-only, so a panic mid-insert cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, Unit>> {
        self.units.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, Unit>> {
        self.units.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DerivedUnitCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DerivedUnitCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedUnitCache")
            .field("len", &self.len())
            .field("warn_threshold", &self.warn_threshold)
            .finish()
    }
}
