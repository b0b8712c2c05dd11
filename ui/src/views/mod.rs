mod about;
mod contact;
mod crop_data;
mod dashboard;
mod home;
mod learn_more;
mod login;
mod signup;

pub use about::About;
pub use contact::Contact;
pub use crop_data::CropData;
pub use dashboard::Dashboard;
pub use home::Home;
pub use learn_more::LearnMore;
pub use login::Login;
pub use signup::Signup;

use dioxus::prelude::*;

/// Subscribe the calling view to the platform's language code so it
/// re-renders with fresh strings after a switch.
pub(crate) fn use_language_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}
