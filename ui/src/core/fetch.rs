//! Loading bundled data files.
//!
//! In the browser the file is fetched from its bundled asset URL. Native
//! builds read the same file straight from the crate's `assets/` directory.

use dioxus::prelude::Asset;
use thiserror::Error;

/// A bundled data file, addressable from both the browser and native builds.
#[derive(Debug, Clone, Copy)]
pub struct DataAsset {
    pub name: &'static str,
    pub web: Asset,
    pub native_path: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to load {name}: {message}")]
    Request { name: &'static str, message: String },
    #[error("Failed to load {name} (HTTP {status})")]
    Status { name: &'static str, status: u16 },
}

pub async fn fetch_text(asset: &DataAsset) -> Result<String, FetchError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = asset.web.to_string();
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Request {
                name: asset.name,
                message: err.to_string(),
            })?;
        if !response.ok() {
            return Err(FetchError::Status {
                name: asset.name,
                status: response.status(),
            });
        }
        response.text().await.map_err(|err| FetchError::Request {
            name: asset.name,
            message: err.to_string(),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::fs::read_to_string(asset.native_path).map_err(|err| FetchError::Request {
            name: asset.name,
            message: err.to_string(),
        })
    }
}
