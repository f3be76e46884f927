//! cardview Core Library
//!
//! Profile record, vCard rendering and contact export for the business card
//! view.
//!
//! ## Overview
//!
//! The card displays a single, fixed [`ProfileRecord`]. Its only behavior
//! with an external contract is exporting that record as a `contact.vcf`
//! file (media type `text/vcard`). Export goes through the [`ExportHost`]
//! trait so the same sequence works against any host that can stage data,
//! save it under a name, and release it afterwards.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardview_core::{export_contact, DownloadDirHost, ExportConfig, ProfileRecord};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = ProfileRecord::default();
//!     let host = DownloadDirHost::new(ExportConfig::default());
//!
//!     export_contact(&host, &profile)?;
//!     println!("saved to {:?}", host.last_saved());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod profile;
pub mod vcard;

// Re-exports
pub use config::ExportConfig;
pub use error::{CardError, CardResult};
pub use export::{export_contact, DownloadDirHost, ExportHost, StagedFile, TemporaryReference};
pub use profile::ProfileRecord;
pub use vcard::{ContactCard, FILE_NAME, MEDIA_TYPE};
