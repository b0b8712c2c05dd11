use crate::{BackendError, NewUser, UserRecord};

/// Operations the portal issues against the `users` table.
///
/// Mobile numbers are passed in canonical form (10 raw digits).
/// Implementations must reject an insert whose mobile already exists with
/// [`BackendError::Duplicate`], even if the caller checked beforehand.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Single-row lookup used by login.
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<UserRecord>, BackendError>;

    /// Existence check used by signup before inserting.
    async fn mobile_exists(&self, mobile: &str) -> Result<bool, BackendError>;

    async fn insert(&self, user: NewUser) -> Result<(), BackendError>;

    /// Stamp `last_login` (RFC 3339) for the given mobile.
    async fn touch_last_login(&self, mobile: &str, timestamp: &str) -> Result<(), BackendError>;
}
