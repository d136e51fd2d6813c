use serde::{Deserialize, Serialize};

/// A blog teaser shown in the "Latest Insights" preview grid.
///
/// Read-mostly in this core: the public renderer truncates the `"blogPosts"`
/// slot to the first few entries. `date` is a display string, `image` a URL;
/// both are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostPreview {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
}
