//! Per-page chrome: dark-mode state and the shared navbar.

use dioxus::prelude::*;

use super::AppNavbar;
use crate::core::theme::ThemePreference;

/// Every routed page. Each owns its dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    LearnMore,
    Contact,
    CropData,
    Login,
    Signup,
    Dashboard,
}

impl Page {
    /// Storage key for this page's dark-mode preference.
    pub fn theme_key(self) -> &'static str {
        match self {
            Self::Home => "homeDarkMode",
            Self::About => "aboutDarkMode",
            Self::LearnMore => "learnMoreDarkMode",
            Self::Contact => "contactDarkMode",
            Self::CropData => "cropDataDarkMode",
            Self::Dashboard => "dashboardDarkMode",
            // The auth cards share the landing page's setting.
            Self::Login | Self::Signup => "homeDarkMode",
        }
    }

    pub fn has_navbar(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::LearnMore => "learn-more",
            Self::Contact => "contact",
            Self::CropData => "crop-data",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
        }
    }
}

/// Wraps a page with its theme class and, where the page has one, the navbar.
///
/// Platforms should key this on the page so the theme signal is rebuilt from
/// storage on navigation.
#[component]
pub fn PageShell(page: Page, children: Element) -> Element {
    let theme = use_signal(|| ThemePreference::load(page.theme_key()));
    let class = format!("app-shell app-shell--{} {}", page.slug(), theme().body_class());

    rsx! {
        div { class: "{class}",
            if page.has_navbar() {
                AppNavbar { theme }
            }
            main { class: "app-shell__main", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_pages_have_distinct_keys() {
        let pages = [
            Page::Home,
            Page::About,
            Page::LearnMore,
            Page::Contact,
            Page::CropData,
            Page::Dashboard,
        ];
        let keys: std::collections::BTreeSet<_> = pages.iter().map(|p| p.theme_key()).collect();
        assert_eq!(keys.len(), pages.len());
        assert_eq!(Page::CropData.theme_key(), "cropDataDarkMode");
        assert_eq!(Page::LearnMore.theme_key(), "learnMoreDarkMode");
    }

    #[test]
    fn auth_pages_have_no_navbar() {
        assert!(!Page::Login.has_navbar());
        assert!(!Page::Signup.has_navbar());
        assert!(Page::Dashboard.has_navbar());
    }
}
