//! Backend connection settings.

use crate::BackendError;

/// Environment variable holding the PostgREST base URL (e.g. `https://xyz.supabase.co`).
pub const URL_VAR: &str = "AGRIDATA_BACKEND_URL";
/// Environment variable holding the anonymous (public) API key.
pub const KEY_VAR: &str = "AGRIDATA_BACKEND_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, BackendError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();
        if url.is_empty() {
            return Err(BackendError::NotConfigured(URL_VAR));
        }
        if anon_key.is_empty() {
            return Err(BackendError::NotConfigured(KEY_VAR));
        }
        Ok(Self { url, anon_key })
    }

    /// Build-time values win; native builds may also pick the values up at runtime.
    /// Browser builds can only see what was baked in by `option_env!`.
    pub fn resolve() -> Result<Self, BackendError> {
        let url = option_env!("AGRIDATA_BACKEND_URL")
            .map(str::to_string)
            .or_else(|| runtime_var(URL_VAR))
            .ok_or(BackendError::NotConfigured(URL_VAR))?;
        let key = option_env!("AGRIDATA_BACKEND_KEY")
            .map(str::to_string)
            .or_else(|| runtime_var(KEY_VAR))
            .ok_or(BackendError::NotConfigured(KEY_VAR))?;
        Self::new(url, key)
    }

    /// `{url}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let cfg = BackendConfig::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(cfg.table_url("users"), "https://demo.supabase.co/rest/v1/users");
    }

    #[test]
    fn blank_values_are_not_configured() {
        assert_eq!(
            BackendConfig::new("  ", "anon"),
            Err(BackendError::NotConfigured(URL_VAR))
        );
        assert_eq!(
            BackendConfig::new("https://demo.supabase.co", ""),
            Err(BackendError::NotConfigured(KEY_VAR))
        );
    }
}
