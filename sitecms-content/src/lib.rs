//! Default content used the first time a slot is read and nothing has been
//! persisted yet.
//!
//! Each function is pure and deterministic: it returns the same fixed,
//! ordered records with sequential ids starting at 1 on every call. The
//! admin editor persists this seed on first run so later loads hit the
//! store; the public renderer uses it as a fallback without writing.

mod blog;
mod faq;
mod footer;

pub use blog::default_blog_posts;
pub use faq::default_faq;
pub use footer::default_footer;
