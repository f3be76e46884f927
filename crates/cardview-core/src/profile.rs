//! Profile Record - The fixed contact data shown on the card
//!
//! The record is created once at startup (built-in or loaded from JSON) and
//! then shared read-only with the view and the contact export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Personal and contact fields displayed and exported by the card.
///
/// Link fields (`website`, `linkedin`, `github`) hold a hostname plus path
/// without a scheme, e.g. `github.com/alexmorgan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Display name, must not be empty
    pub name: String,

    /// Job title
    pub title: String,

    /// Organization
    pub company: String,

    /// Free-text biography
    pub bio: String,

    /// Contact email address
    pub email: String,

    /// Phone number as displayed
    pub phone: String,

    /// Free-text location
    pub location: String,

    /// Personal website (no scheme)
    pub website: String,

    /// LinkedIn profile (no scheme)
    pub linkedin: String,

    /// GitHub profile (no scheme)
    pub github: String,

    /// Profile image locator
    pub image_url: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: "Senior Product Designer".to_string(),
            company: "Creative Studios Inc.".to_string(),
            bio: "Passionate about creating intuitive digital experiences that blend form and \
                  function. Specialized in UX/UI design with 8+ years of experience."
                .to_string(),
            email: "alex.morgan@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "www.alexmorgan.design".to_string(),
            linkedin: "linkedin.com/in/alexmorgan".to_string(),
            github: "github.com/alexmorgan".to_string(),
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop"
                .to_string(),
        }
    }
}

impl ProfileRecord {
    /// Parse and validate a profile from a JSON document.
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read, parse and validate a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let profile = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), name = %profile.name, "Loaded profile");
        Ok(profile)
    }

    /// Check the record invariants.
    pub fn validate(&self) -> CardResult<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::InvalidProfile(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// First character of each space-separated token of the name.
    ///
    /// Repeated spaces produce empty tokens, which contribute nothing.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|token| token.chars().next())
            .collect()
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn website_href(&self) -> String {
        https_href(&self.website)
    }

    pub fn linkedin_href(&self) -> String {
        https_href(&self.linkedin)
    }

    pub fn github_href(&self) -> String {
        https_href(&self.github)
    }
}

fn https_href(host_and_path: &str) -> String {
    format!("https://{}", host_and_path)
}
