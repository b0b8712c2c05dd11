//! PostgREST client for the hosted `users` table.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::{BackendConfig, BackendError, NewUser, UserRecord, UserStore, USERS_TABLE};

#[derive(Debug, Clone)]
pub struct RestUserStore {
    config: BackendConfig,
    client: Client,
}

impl RestUserStore {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    fn users_url(&self) -> String {
        self.config.table_url(USERS_TABLE)
    }
}

/// PostgREST filter value for an equality match.
pub(crate) fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

async fn check_status(response: Response, mobile: &str) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::CONFLICT {
        return Err(BackendError::Duplicate {
            mobile: mobile.to_string(),
        });
    }
    warn!(status = status.as_u16(), "backend request rejected");
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

impl UserStore for RestUserStore {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<UserRecord>, BackendError> {
        let request = self
            .client
            .get(self.users_url())
            .query(&[("mobile", eq_filter(mobile).as_str()), ("select", "*")]);
        let response = self.authorize(request).send().await?;
        let rows: Vec<UserRecord> = check_status(response, mobile).await?.json().await?;
        debug!(matches = rows.len(), "user lookup");
        Ok(rows.into_iter().next())
    }

    async fn mobile_exists(&self, mobile: &str) -> Result<bool, BackendError> {
        let request = self
            .client
            .get(self.users_url())
            .query(&[("mobile", eq_filter(mobile).as_str()), ("select", "id")]);
        let response = self.authorize(request).send().await?;
        let rows = check_status(response, mobile).await?.json::<Vec<IgnoredAny>>().await?;
        Ok(!rows.is_empty())
    }

    async fn insert(&self, user: NewUser) -> Result<(), BackendError> {
        let mobile = user.mobile.clone();
        let request = self
            .client
            .post(self.users_url())
            .header("Prefer", "return=minimal")
            .json(&user);
        let response = self.authorize(request).send().await?;
        check_status(response, &mobile).await?;
        Ok(())
    }

    async fn touch_last_login(&self, mobile: &str, timestamp: &str) -> Result<(), BackendError> {
        let request = self
            .client
            .patch(self.users_url())
            .query(&[("mobile", eq_filter(mobile).as_str())])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "last_login": timestamp }));
        let response = self.authorize(request).send().await?;
        check_status(response, mobile).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existence_body_counts_rows_of_any_shape() {
        let decode = |body: &str| serde_json::from_str::<Vec<IgnoredAny>>(body).unwrap().len();
        assert_eq!(decode("[]"), 0);
        assert_eq!(decode(r#"[{"id":12}]"#), 1);
        assert_eq!(decode(r#"[{"id":"uuid-like"},{"mobile":"9876543210"}]"#), 2);
    }

    #[test]
    fn equality_filter_uses_postgrest_syntax() {
        assert_eq!(eq_filter("9876543210"), "eq.9876543210");
    }

    #[test]
    fn users_url_targets_rest_endpoint() {
        let cfg = BackendConfig::new("https://demo.supabase.co", "anon").unwrap();
        let store = RestUserStore::new(cfg);
        assert_eq!(store.users_url(), "https://demo.supabase.co/rest/v1/users");
    }
}
