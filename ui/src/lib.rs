//! Shared UI crate for the Agridata portal: views, components, the crop data
//! pipeline, the choropleth model and the auth flows.

pub mod auth;
pub mod core;
pub mod cropdata;
pub mod data;
pub mod i18n;
pub mod map;
pub mod views;

pub mod components {
    // Localized navbar; links come from the platform through `NavBuilder`.
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod page_shell;
    pub use page_shell::{Page, PageShell};
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
