//! vCard payload generation
//!
//! Produces the contact-card text for a [`ProfileRecord`]. The layout is a
//! fixed eight-field vCard 3.0 template.

use crate::profile::ProfileRecord;

/// Media type attached to the exported payload
pub const MEDIA_TYPE: &str = "text/vcard";

/// Suggested file name for every export
pub const FILE_NAME: &str = "contact.vcf";

/// Render the vCard text for a profile.
///
/// Lines are joined with `\n` and there is no trailing separator after
/// `END:VCARD`. Field values are inserted verbatim: `,` `;` `\` and newlines
/// are not escaped, and the `N` and `ADR` properties are not emitted, so the
/// output is not strictly RFC 2426 compliant.
pub fn render(profile: &ProfileRecord) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", profile.name),
        format!("TITLE:{}", profile.title),
        format!("ORG:{}", profile.company),
        format!("TEL:{}", profile.phone),
        format!("EMAIL:{}", profile.email),
        format!("URL:{}", profile.website),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

/// A rendered contact card ready to hand to an export host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    /// UTF-8 vCard text
    pub payload: String,
    /// Always [`MEDIA_TYPE`]
    pub media_type: &'static str,
    /// Always [`FILE_NAME`]
    pub file_name: &'static str,
}

impl ContactCard {
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        Self {
            payload: render(profile),
            media_type: MEDIA_TYPE,
            file_name: FILE_NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALEX_MORGAN_VCARD: &str = "BEGIN:VCARD\n\
        VERSION:3.0\n\
        FN:Alex Morgan\n\
        TITLE:Senior Product Designer\n\
        ORG:Creative Studios Inc.\n\
        TEL:+1 (555) 123-4567\n\
        EMAIL:alex.morgan@email.com\n\
        URL:www.alexmorgan.design\n\
        END:VCARD";

    #[test]
    fn test_render_default_profile() {
        let payload = render(&ProfileRecord::default());
        assert_eq!(payload, ALEX_MORGAN_VCARD);
        assert!(!payload.ends_with('\n'));
        assert_eq!(payload.lines().count(), 9);
    }

    #[test]
    fn test_render_ignores_display_only_fields() {
        let profile = ProfileRecord {
            bio: "something else".to_string(),
            location: "Nowhere".to_string(),
            linkedin: "linkedin.com/in/other".to_string(),
            github: "github.com/other".to_string(),
            image_url: String::new(),
            ..Default::default()
        };
        assert_eq!(render(&profile), ALEX_MORGAN_VCARD);
    }

    #[test]
    fn test_reserved_characters_pass_through() {
        let profile = ProfileRecord {
            name: "Doe; Jane, Jr.".to_string(),
            title: "Lead: Design\nResearch".to_string(),
            company: "A\\B".to_string(),
            ..Default::default()
        };
        let payload = render(&profile);
        assert!(payload.contains("FN:Doe; Jane, Jr.\n"));
        assert!(payload.contains("TITLE:Lead: Design\nResearch\n"));
        assert!(payload.contains("ORG:A\\B\n"));
    }

    #[test]
    fn test_contact_card_constants() {
        let card = ContactCard::from_profile(&ProfileRecord::default());
        assert_eq!(card.media_type, "text/vcard");
        assert_eq!(card.file_name, "contact.vcf");
        assert_eq!(card.payload, ALEX_MORGAN_VCARD);
    }
}
