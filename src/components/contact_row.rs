//! Contact Row Component
//!
//! Icon bubble plus text, optionally linked.

use cardview_ui::{Icon, IconKind};
use dioxus::prelude::*;

/// One line of contact information
///
/// Rows with an `href` render as links; `external` links open outside the
/// card window.
#[component]
pub fn ContactRow(
    icon: IconKind,
    text: String,
    #[props(default = None)]
    href: Option<String>,
    #[props(default = false)]
    external: bool,
) -> Element {
    let body = rsx! {
        span { class: "contact-row__icon",
            Icon { kind: icon }
        }
        span { class: "contact-row__text", "{text}" }
    };

    match href {
        Some(href) if external => rsx! {
            a {
                class: "contact-row contact-row--link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {body}
            }
        },
        Some(href) => rsx! {
            a {
                class: "contact-row contact-row--link",
                href: "{href}",
                {body}
            }
        },
        None => rsx! {
            div { class: "contact-row", {body} }
        },
    }
}
