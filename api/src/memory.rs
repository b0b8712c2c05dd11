use std::sync::{Arc, Mutex, MutexGuard};

use crate::{BackendError, NewUser, UserRecord, UserStore};

/// Process-local store with the same uniqueness rules as the hosted table.
///
/// Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<UserRecord>,
    next_id: i64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave rows half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<UserRecord>, BackendError> {
        Ok(self.lock().rows.iter().find(|row| row.mobile == mobile).cloned())
    }

    async fn mobile_exists(&self, mobile: &str) -> Result<bool, BackendError> {
        Ok(self.lock().rows.iter().any(|row| row.mobile == mobile))
    }

    async fn insert(&self, user: NewUser) -> Result<(), BackendError> {
        let mut inner = self.lock();
        if inner.rows.iter().any(|row| row.mobile == user.mobile) {
            return Err(BackendError::Duplicate {
                mobile: user.mobile,
            });
        }
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(user.into_record(id));
        Ok(())
    }

    async fn touch_last_login(&self, mobile: &str, timestamp: &str) -> Result<(), BackendError> {
        let mut inner = self.lock();
        for row in inner.rows.iter_mut().filter(|row| row.mobile == mobile) {
            row.last_login = Some(timestamp.to_string());
        }
        Ok(())
    }
}
