use dioxus::prelude::*;

use crate::components::BusinessCard;
use crate::context::use_profile;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and centers the card on the backdrop.
#[component]
pub fn App() -> Element {
    let profile = use_profile();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "card-backdrop",
            BusinessCard { profile }
        }
    }
}
