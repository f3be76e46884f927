//! Avatar Component
//!
//! Profile photo with an initials fallback when the image cannot be loaded.

use dioxus::prelude::*;

/// Round profile image that falls back to initials
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Avatar {
///         image_url: profile.image_url.clone(),
///         alt: profile.name.clone(),
///         initials: profile.initials(),
///     }
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image locator
    image_url: String,
    /// Alt text for accessibility
    alt: String,
    /// Text shown when the image fails
    initials: String,
) -> Element {
    let mut failed = use_signal(|| false);

    if shows_initials(&image_url, failed()) {
        return rsx! {
            div {
                class: "avatar avatar--fallback",
                role: "img",
                "aria-label": "{alt}",
                "{initials}"
            }
        };
    }

    rsx! {
        img {
            class: "avatar",
            src: "{image_url}",
            alt: "{alt}",
            onerror: move |_| {
                tracing::debug!("Avatar image failed to load, showing initials");
                failed.set(true);
            },
        }
    }
}

/// The initials replace the image when there is none or it failed to load.
fn shows_initials(image_url: &str, failed: bool) -> bool {
    image_url.is_empty() || failed
}
