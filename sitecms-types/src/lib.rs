//! Core type definitions for sitecms.
//!
//! This crate defines the structured records an operator edits through the
//! admin panel and the public site renders:
//! - FAQ entries
//! - The footer document (sections, links, social URLs, copyright)
//! - Blog post teasers
//!
//! Records are plain serde types whose wire format is pinned to the slot
//! JSON produced by the reference site (`isExternal`, `socialLinks`, ...).
//! Store, editor, and renderer behavior live in their own crates.

mod blog;
mod faq;
mod footer;
mod ids;
mod record;

pub mod slots;

pub use blog::BlogPostPreview;
pub use faq::FaqItem;
pub use footer::{FooterDocument, FooterLink, FooterSection, SocialLinks, SocialPlatform};
pub use ids::IdAllocator;
pub use record::{MissingField, Record};
