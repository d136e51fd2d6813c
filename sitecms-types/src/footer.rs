//! The footer document: sections of links plus social URLs and a copyright
//! line, persisted to the `"footerData"` slot as one aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable link inside a footer section.
///
/// Link ids are unique across the whole document, not just within their
/// section. `is_external` is a dispatch hint for the host's router: external
/// links open in a new tab with no-referrer semantics, internal ones go
/// through in-app routing. The core stores the URL verbatim either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub is_external: bool,
}

/// A titled group of links. A section exclusively owns its links; deleting
/// the section discards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub id: u64,
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Social profile URLs shown in the footer's bottom row. Empty string means
/// the platform is not configured and the host skips the icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
}

impl SocialLinks {
    /// Returns the URL for a platform.
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Instagram => &self.instagram,
        }
    }

    /// Sets the URL for a platform.
    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        let slot = match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Instagram => &mut self.instagram,
        };
        *slot = url.into();
    }
}

/// The social platforms the footer knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
        };
        write!(f, "{name}")
    }
}

/// The root footer aggregate. Saved and loaded as a single unit; there is
/// no per-section persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDocument {
    pub sections: Vec<FooterSection>,
    pub copyright: String,
    pub social_links: SocialLinks,
}

impl FooterDocument {
    /// Looks up a section by id.
    pub fn section(&self, id: u64) -> Option<&FooterSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Looks up a section by id, mutably.
    pub fn section_mut(&mut self, id: u64) -> Option<&mut FooterSection> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Iterates over every link id in the document, across all sections.
    pub fn link_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.sections.iter().flat_map(|s| s.links.iter().map(|l| l.id))
    }
}
