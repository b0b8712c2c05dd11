use serde::{Deserialize, Serialize};

/// Row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub state: String,
    pub district: String,
    pub password_hash: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Insert payload; `id` and `last_login` are assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub state: String,
    pub district: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn into_record(self, id: i64) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            mobile: self.mobile,
            state: self.state,
            district: self.district,
            password_hash: self.password_hash,
            last_login: None,
        }
    }
}
