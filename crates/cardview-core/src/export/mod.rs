//! Contact export
//!
//! Exporting a card is an acquire → save → release sequence against an
//! [`ExportHost`]:
//!
//! 1. the host turns the payload into a temporary reference
//! 2. the host saves the referenced data under a suggested file name
//! 3. the reference is released
//!
//! [`TemporaryReference`] owns the handle between steps 1 and 3 and releases
//! it on drop, so a failed save never leaks the reference.
//!
//! ## Usage
//!
//! ```ignore
//! let host = DownloadDirHost::new(ExportConfig::default());
//! export_contact(&host, &profile)?;
//! ```

mod download_dir;

pub use download_dir::{numbered_file_name, DownloadDirHost, StagedFile};

use crate::error::{CardError, CardResult};
use crate::profile::ProfileRecord;
use crate::vcard::ContactCard;

/// The host capabilities a contact export depends on.
pub trait ExportHost {
    /// Short-lived reference to staged payload data
    type Handle;

    /// Package `payload` as downloadable data and return a reference to it.
    fn create_reference(&self, payload: &[u8], media_type: &str) -> CardResult<Self::Handle>;

    /// Save the referenced data under `file_name`.
    fn trigger_save(&self, handle: &Self::Handle, file_name: &str) -> CardResult<()>;

    /// Release the reference. Called exactly once per created handle.
    fn release(&self, handle: Self::Handle) -> CardResult<()>;
}

/// Scoped ownership of a host reference.
///
/// Dropping the guard without calling [`TemporaryReference::release`]
/// releases the handle and logs any failure.
pub struct TemporaryReference<'h, H: ExportHost> {
    host: &'h H,
    handle: Option<H::Handle>,
}

impl<'h, H: ExportHost> TemporaryReference<'h, H> {
    pub fn acquire(host: &'h H, payload: &[u8], media_type: &str) -> CardResult<Self> {
        let handle = host.create_reference(payload, media_type)?;
        Ok(Self {
            host,
            handle: Some(handle),
        })
    }

    pub fn save_as(&self, file_name: &str) -> CardResult<()> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| CardError::TriggerSave("reference already released".to_string()))?;
        self.host.trigger_save(handle, file_name)
    }

    /// Release the reference now, surfacing any host failure.
    pub fn release(mut self) -> CardResult<()> {
        match self.handle.take() {
            Some(handle) => self.host.release(handle),
            None => Ok(()),
        }
    }
}

impl<H: ExportHost> Drop for TemporaryReference<'_, H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.host.release(handle) {
                tracing::warn!("Failed to release temporary reference: {}", e);
            }
        }
    }
}

/// Render the profile as a vCard and save it through `host` as `contact.vcf`.
///
/// Runs synchronously. Host failures propagate unchanged; nothing is retried.
pub fn export_contact<H: ExportHost>(host: &H, profile: &ProfileRecord) -> CardResult<()> {
    let card = ContactCard::from_profile(profile);
    let reference = TemporaryReference::acquire(host, card.payload.as_bytes(), card.media_type)?;
    reference.save_as(card.file_name)?;
    reference.release()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Create { payload: String, media_type: String },
        Save { handle: u32, file_name: String },
        Release { handle: u32 },
    }

    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<Call>>,
        next_handle: RefCell<u32>,
        fail_create: bool,
        fail_save: bool,
        fail_release: bool,
    }

    impl ExportHost for RecordingHost {
        type Handle = u32;

        fn create_reference(&self, payload: &[u8], media_type: &str) -> CardResult<u32> {
            if self.fail_create {
                return Err(CardError::CreateReference("no blob support".to_string()));
            }
            let mut next = self.next_handle.borrow_mut();
            *next += 1;
            self.calls.borrow_mut().push(Call::Create {
                payload: String::from_utf8_lossy(payload).into_owned(),
                media_type: media_type.to_string(),
            });
            Ok(*next)
        }

        fn trigger_save(&self, handle: &u32, file_name: &str) -> CardResult<()> {
            self.calls.borrow_mut().push(Call::Save {
                handle: *handle,
                file_name: file_name.to_string(),
            });
            if self.fail_save {
                return Err(CardError::TriggerSave("save blocked".to_string()));
            }
            Ok(())
        }

        fn release(&self, handle: u32) -> CardResult<()> {
            self.calls.borrow_mut().push(Call::Release { handle });
            if self.fail_release {
                return Err(CardError::ReleaseReference("revoke failed".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_export_acquires_saves_releases() {
        let host = RecordingHost::default();
        let profile = ProfileRecord::default();

        export_contact(&host, &profile).unwrap();

        let calls = host.calls.borrow();
        assert_eq!(
            *calls,
            vec![
                Call::Create {
                    payload: crate::vcard::render(&profile),
                    media_type: "text/vcard".to_string(),
                },
                Call::Save {
                    handle: 1,
                    file_name: "contact.vcf".to_string(),
                },
                Call::Release { handle: 1 },
            ]
        );
    }

    #[test]
    fn test_failed_save_still_releases() {
        let host = RecordingHost {
            fail_save: true,
            ..Default::default()
        };

        let result = export_contact(&host, &ProfileRecord::default());
        assert!(matches!(result, Err(CardError::TriggerSave(_))));

        let calls = host.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2], Call::Release { handle: 1 });
    }

    #[test]
    fn test_failed_create_saves_nothing() {
        let host = RecordingHost {
            fail_create: true,
            ..Default::default()
        };

        let result = export_contact(&host, &ProfileRecord::default());
        assert!(matches!(result, Err(CardError::CreateReference(_))));
        assert!(host.calls.borrow().is_empty());
    }

    #[test]
    fn test_release_failure_propagates() {
        let host = RecordingHost {
            fail_release: true,
            ..Default::default()
        };

        let result = export_contact(&host, &ProfileRecord::default());
        assert!(matches!(result, Err(CardError::ReleaseReference(_))));
        // Released once, not again on drop
        let releases = host
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Release { .. }))
            .count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn test_repeated_exports_are_independent() {
        let host = RecordingHost::default();
        let profile = ProfileRecord::default();

        export_contact(&host, &profile).unwrap();
        export_contact(&host, &profile).unwrap();

        let calls = host.calls.borrow();
        let payloads: Vec<&String> = calls
            .iter()
            .filter_map(|c| match c {
                Call::Create { payload, .. } => Some(payload),
                _ => None,
            })
            .collect();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0], payloads[1]);
        assert!(calls.contains(&Call::Release { handle: 1 }));
        assert!(calls.contains(&Call::Release { handle: 2 }));
    }

    #[test]
    fn test_dropped_guard_releases() {
        let host = RecordingHost::default();
        {
            let reference = TemporaryReference::acquire(&host, b"x", "text/plain").unwrap();
            reference.save_as("x.txt").unwrap();
        }
        assert_eq!(
            host.calls.borrow().last(),
            Some(&Call::Release { handle: 1 })
        );
    }
}
