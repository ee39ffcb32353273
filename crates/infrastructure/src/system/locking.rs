//! Process-wide lock table for crypto libraries that ask the host to
//! serialize access to their shared state by numbered lock.
//!
//! The table is created once by [`init`] and torn down by [`cleanup`].
//! Both are idempotent.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Lock count used when the crypto library does not report its own.
pub const DEFAULT_LOCK_COUNT: usize = 41;

static LOCK_TABLE: Mutex<Option<Arc<LockTable>>> = Mutex::new(None);

pub struct LockTable {
    locks: Box<[Mutex<()>]>,
}

impl LockTable {
    fn new(count: usize) -> Self {
        Self {
            locks: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Runs `f` while holding lock `index`. `None` if there is no such lock.
    pub fn with_lock<R>(&self, index: usize, f: impl FnOnce() -> R) -> Option<R> {
        let lock = self.locks.get(index)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f())
    }
}

fn table() -> MutexGuard<'static, Option<Arc<LockTable>>> {
    LOCK_TABLE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates the lock table with `count` locks, or returns the existing one.
///
/// A second call does not resize an existing table.
pub fn init(count: usize) -> Arc<LockTable> {
    let mut slot = table();
    if let Some(existing) = slot.as_ref() {
        return Arc::clone(existing);
    }

    debug!(locks = count, "Crypto lock table initialized");
    let created = Arc::new(LockTable::new(count));
    *slot = Some(Arc::clone(&created));
    created
}

/// Drops the process-wide table. Holders of an `Arc` keep theirs alive.
pub fn cleanup() {
    if table().take().is_some() {
        debug!("Crypto lock table released");
    }
}

pub fn is_initialized() -> bool {
    table().is_some()
}

/// Runs `f` under lock `index` of the current table.
///
/// `None` when the table is not initialized or `index` is out of range.
pub fn with_lock<R>(index: usize, f: impl FnOnce() -> R) -> Option<R> {
    let current = table().as_ref().map(Arc::clone)?;
    current.with_lock(index, f)
}
