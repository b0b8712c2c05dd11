//! Platform-agnostic building blocks shared by the views.

pub mod digest;
pub mod fetch;
pub mod format;
pub mod mobile;
pub mod platform;
pub mod session;
pub mod storage;
pub mod theme;
pub mod timing;
