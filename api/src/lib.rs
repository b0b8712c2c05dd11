//! Backend collaborator for the Agridata portal.
//!
//! The portal keeps its user accounts in a hosted PostgREST service (a
//! Supabase project in production). Everything the UI needs from it goes
//! through the [`UserStore`] trait so the auth flows can be exercised against
//! [`MemoryUserStore`] in tests and [`RestUserStore`] in the browser.

mod config;
mod error;
mod memory;
mod model;
mod rest;
mod store;

pub use config::BackendConfig;
pub use error::BackendError;
pub use memory::MemoryUserStore;
pub use model::{NewUser, UserRecord};
pub use rest::RestUserStore;
pub use store::UserStore;

/// Name of the backend table holding user accounts.
pub const USERS_TABLE: &str = "users";

/// Build the production store from the resolved configuration.
pub fn connect() -> Result<RestUserStore, BackendError> {
    let config = BackendConfig::resolve()?;
    Ok(RestUserStore::new(config))
}
