use api::BackendError;
use thiserror::Error;

use crate::core::mobile::InvalidMobile;
use crate::core::storage::StorageError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Every failed signup check, in form order.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    #[error("Please enter both mobile number and password")]
    MissingCredentials,
    #[error("User not found. Please check your mobile number or sign up.")]
    UserNotFound,
    #[error("Invalid password. Please try again.")]
    InvalidPassword,
    #[error("An account with this mobile number already exists.")]
    DuplicateAccount,
    #[error("{0}")]
    Backend(BackendError),
    #[error("Couldn't save your session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Lines to show under the form.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<InvalidMobile> for AuthError {
    fn from(_: InvalidMobile) -> Self {
        Self::InvalidMobile
    }
}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        if err.is_duplicate() {
            Self::DuplicateAccount
        } else {
            Self::Backend(err)
        }
    }
}
