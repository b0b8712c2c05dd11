use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, Page, PageShell};
use ui::views::{About, Contact, CropData, Dashboard, Home, LearnMore, Login, Signup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/learn-more")]
    LearnMore {},
    #[route("/contact")]
    Contact {},
    #[route("/crop-data")]
    CropData {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
}

impl Route {
    fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::About {} => Page::About,
            Route::LearnMore {} => Page::LearnMore,
            Route::Contact {} => Page::Contact,
            Route::CropData {} => Page::CropData,
            Route::Login {} => Page::Login,
            Route::Signup {} => Page::Signup,
            Route::Dashboard {} => Page::Dashboard,
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link(to: Route, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to,
        "{label}"
    })
}

fn nav_home(label: &str) -> Element {
    nav_link(Route::Home {}, label)
}
fn nav_about(label: &str) -> Element {
    nav_link(Route::About {}, label)
}
fn nav_learn_more(label: &str) -> Element {
    nav_link(Route::LearnMore {}, label)
}
fn nav_crop_data(label: &str) -> Element {
    nav_link(Route::CropData {}, label)
}
fn nav_contact(label: &str) -> Element {
    nav_link(Route::Contact {}, label)
}
fn nav_login(label: &str) -> Element {
    nav_link(Route::Login {}, label)
}
fn nav_dashboard(label: &str) -> Element {
    nav_link(Route::Dashboard {}, label)
}

fn main() {
    // A second init (hot reload) reports an error; the first logger stays active.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        about: nav_about,
        learn_more: nav_learn_more,
        crop_data: nav_crop_data,
        contact: nav_contact,
        login: nav_login,
        dashboard: nav_dashboard,
    });
    // Language code shared with the navbar's picker; views subscribe to it.
    use_context_provider(|| Signal::new("en-US".to_string()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Per-route chrome. Keyed on the page so each navigation reloads that
/// page's theme preference.
#[component]
fn WebShell() -> Element {
    let page = use_route::<Route>().page();
    rsx! {
        PageShell { key: "{page.slug()}", page,
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_maps_to_its_page() {
        let cases = [
            ("/", Page::Home),
            ("/about", Page::About),
            ("/learn-more", Page::LearnMore),
            ("/contact", Page::Contact),
            ("/crop-data", Page::CropData),
            ("/login", Page::Login),
            ("/signup", Page::Signup),
            ("/dashboard", Page::Dashboard),
        ];
        for (path, page) in cases {
            let route: Route = path.parse().unwrap_or_else(|_| panic!("{path} should route"));
            assert_eq!(route.page(), page);
            assert_eq!(route.to_string(), path);
        }
    }
}
