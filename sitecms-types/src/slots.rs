//! Well-known slot keys.
//!
//! These must match the reference site byte-for-byte so either
//! implementation can read the other's data.

/// Ordered array of [`crate::FaqItem`].
pub const FAQ: &str = "faqData";

/// A single [`crate::FooterDocument`].
pub const FOOTER: &str = "footerData";

/// Ordered array of [`crate::BlogPostPreview`].
pub const BLOG: &str = "blogPosts";
