//! Save Contact Button
//!
//! Exports the profile as `contact.vcf` through the shared export host.

use std::path::PathBuf;

use cardview_core::export_contact;
use cardview_ui::{Button, ButtonVariant, Icon, IconKind};
use dioxus::prelude::*;

use crate::context::{use_exporter, CardProfile};

/// Outcome of the most recent click
#[derive(Clone, Debug, PartialEq)]
pub enum SaveStatus {
    Saved(Option<PathBuf>),
    Failed(String),
}

impl SaveStatus {
    pub fn message(&self) -> String {
        match self {
            SaveStatus::Saved(Some(path)) => format!("Saved to {}", path.display()),
            SaveStatus::Saved(None) => "Contact saved".to_string(),
            SaveStatus::Failed(err) => format!("Could not save contact: {}", err),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SaveStatus::Saved(_) => "save-status save-status--ok",
            SaveStatus::Failed(_) => "save-status save-status--error",
        }
    }
}

/// "Save Contact" action with a status line underneath
#[component]
pub fn SaveContactButton(profile: CardProfile) -> Element {
    let exporter = use_exporter();
    let mut status = use_signal(|| Option::<SaveStatus>::None);

    // Runs synchronously on every click; no debouncing
    let save = move |_: ()| match export_contact(&*exporter, &profile) {
        Ok(()) => status.set(Some(SaveStatus::Saved(exporter.last_saved()))),
        Err(e) => {
            tracing::error!("Failed to save contact: {}", e);
            status.set(Some(SaveStatus::Failed(e.to_string())));
        }
    };

    rsx! {
        div { class: "save-contact",
            Button {
                variant: ButtonVariant::Primary,
                class: "save-contact__button".to_string(),
                onclick: save,
                Icon { kind: IconKind::Download, size: 16 }
                "Save Contact"
            }
            if let Some(current) = status() {
                div { class: current.class(), "{current.message()}" }
            }
        }
    }
}
