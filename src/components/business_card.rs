//! Business Card Component
//!
//! Header, bio, contact rows, social links and the save action for one
//! profile.

use cardview_ui::{Icon, IconKind, IconLink};
use dioxus::prelude::*;

use super::{Avatar, ContactRow, SaveContactButton};
use crate::context::CardProfile;

/// Read-only business card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     BusinessCard { profile: use_profile() }
/// }
/// ```
#[component]
pub fn BusinessCard(
    /// Profile to display and export
    profile: CardProfile,
) -> Element {
    rsx! {
        article { class: "business-card",
            // Header: avatar, name, title, company
            header { class: "business-card__header",
                Avatar {
                    image_url: profile.image_url.clone(),
                    alt: profile.name.clone(),
                    initials: profile.initials(),
                }
                div { class: "business-card__identity",
                    h1 { class: "business-card__name", "{profile.name}" }
                    p { class: "business-card__title", "{profile.title}" }
                    p { class: "business-card__company", "{profile.company}" }
                }
            }

            p { class: "business-card__bio", "{profile.bio}" }

            hr { class: "separator" }

            div { class: "business-card__contacts",
                ContactRow {
                    icon: IconKind::Mail,
                    text: profile.email.clone(),
                    href: Some(profile.mailto_href()),
                }
                ContactRow {
                    icon: IconKind::Phone,
                    text: profile.phone.clone(),
                    href: Some(profile.tel_href()),
                }
                ContactRow {
                    icon: IconKind::MapPin,
                    text: profile.location.clone(),
                }
                ContactRow {
                    icon: IconKind::Globe,
                    text: profile.website.clone(),
                    href: Some(profile.website_href()),
                    external: true,
                }
            }

            hr { class: "separator" }

            footer { class: "business-card__actions",
                div { class: "business-card__social",
                    IconLink {
                        href: profile.linkedin_href(),
                        aria_label: IconKind::Linkedin.label().to_string(),
                        Icon { kind: IconKind::Linkedin }
                    }
                    IconLink {
                        href: profile.github_href(),
                        aria_label: IconKind::Github.label().to_string(),
                        Icon { kind: IconKind::Github }
                    }
                }
                SaveContactButton { profile: profile.clone() }
            }
        }
    }
}
