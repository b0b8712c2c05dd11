//! Login and signup flows.
//!
//! [`AuthService`] is generic over [`api::UserStore`] so the same code drives
//! the hosted backend in the browser and [`api::MemoryUserStore`] in tests.
//! Views only see [`AuthError`] display strings.

mod error;
mod service;
mod validation;

pub use error::AuthError;
pub use service::{AuthService, LoginForm};
pub use validation::SignupForm;
