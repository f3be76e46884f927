//! Root context for the card view.
//!
//! The profile and the export host are created in `main` and handed to the
//! Dioxus runtime with `LaunchBuilder::with_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let profile = use_profile();
//! let exporter = use_exporter();
//! export_contact(&*exporter, &profile)?;
//! ```

use std::sync::Arc;

use cardview_core::{DownloadDirHost, ProfileRecord};
use dioxus::prelude::*;

/// Read-only profile shared by every component.
pub type CardProfile = Arc<ProfileRecord>;

/// Export host used by the save button.
pub type SharedExporter = Arc<DownloadDirHost>;

/// Hook to access the profile from context.
pub fn use_profile() -> CardProfile {
    use_context::<CardProfile>()
}

/// Hook to access the export host from context.
pub fn use_exporter() -> SharedExporter {
    use_context::<SharedExporter>()
}
