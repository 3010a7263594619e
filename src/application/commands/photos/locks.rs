use crate::domain::user::UserId;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, Weak},
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-owner critical sections. Each owner maps to its own async mutex; the
/// registry only keeps weak handles, so an entry disappears once no task
/// holds or waits on it.
#[derive(Default)]
pub struct OwnerLocks {
    slots: Mutex<HashMap<UserId, Weak<AsyncMutex<()>>>>,
}

/// Held for the duration of a check-then-act sequence on one owner's photos.
#[must_use = "the owner lock is released as soon as the guard is dropped"]
pub struct OwnerGuard {
    _guard: OwnedMutexGuard<()>,
}

impl OwnerLocks {
    pub async fn lock(&self, owner: UserId) -> OwnerGuard {
        let slot = self.slot(owner);
        OwnerGuard {
            _guard: slot.lock_owned().await,
        }
    }

    /// Number of owners with a live lock slot.
    #[cfg(test)]
    fn active(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|weak| weak.strong_count() > 0).count()
    }

    fn slot(&self, owner: UserId) -> Arc<AsyncMutex<()>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.retain(|_, weak| weak.strong_count() > 0);

        if let Some(existing) = slots.get(&owner).and_then(Weak::upgrade) {
            return existing;
        }

        let fresh = Arc::new(AsyncMutex::new(()));
        slots.insert(owner, Arc::downgrade(&fresh));
        fresh
    }
}
