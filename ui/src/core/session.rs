//! Logged-in session persisted in local storage.
//!
//! Layout matches what existing browsers already hold: a JSON blob under
//! `user` (camelCase fields) plus `isLoggedIn = "true"`.

use api::UserRecord;
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::mobile::Mobile;
use super::storage::{self, StorageError};

pub const SESSION_KEY: &str = "user";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub state: String,
    pub district: String,
    pub is_logged_in: bool,
    pub login_time: String,
}

impl Session {
    pub fn from_user(user: &UserRecord, login_time: OffsetDateTime) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            mobile: user.mobile.clone(),
            state: user.state.clone(),
            district: user.district.clone(),
            is_logged_in: true,
            login_time: login_time
                .format(&Rfc3339)
                .unwrap_or_else(|_| login_time.unix_timestamp().to_string()),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// `+91` form when the stored number is canonical, the raw value otherwise.
    pub fn display_mobile(&self) -> String {
        Mobile::parse(&self.mobile)
            .map(|m| m.display())
            .unwrap_or_else(|_| self.mobile.clone())
    }

    pub fn location(&self) -> String {
        match (self.district.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.district, self.state),
            (true, false) => self.state.clone(),
            (false, true) => self.district.clone(),
            (true, true) => String::new(),
        }
    }
}

pub fn save(session: &Session) -> Result<(), StorageError> {
    let json = serde_json::to_string(session).map_err(|err| StorageError::Encode {
        key: SESSION_KEY.to_string(),
        message: err.to_string(),
    })?;
    storage::set_item(SESSION_KEY, &json)?;
    storage::set_item(LOGGED_IN_KEY, "true")
}

/// Returns the stored session when the login flag is set and the blob decodes.
pub fn load() -> Option<Session> {
    if storage::get_item(LOGGED_IN_KEY).as_deref() != Some("true") {
        return None;
    }
    let raw = storage::get_item(SESSION_KEY)?;
    serde_json::from_str::<Session>(&raw)
        .ok()
        .filter(|session| session.is_logged_in)
}

pub fn clear() -> Result<(), StorageError> {
    storage::remove_item(SESSION_KEY)?;
    storage::remove_item(LOGGED_IN_KEY)
}
