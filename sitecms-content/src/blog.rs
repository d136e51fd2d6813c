use sitecms_types::BlogPostPreview;

/// The blog teasers shown before any posts have been published through the
/// admin panel.
#[must_use]
pub fn default_blog_posts() -> Vec<BlogPostPreview> {
    vec![
        BlogPostPreview {
            id: 1,
            title: "10 Branding Trends to Watch in 2023".to_string(),
            category: "Branding".to_string(),
            excerpt: "Discover the latest trends shaping brand identity and how to leverage them for your business.".to_string(),
            image: "https://images.unsplash.com/photo-1493421419110-74f4e85ba126?auto=format&fit=crop&w=2369&q=80".to_string(),
            date: "June 12, 2023".to_string(),
            author: "Sarah Johnson".to_string(),
        },
        BlogPostPreview {
            id: 2,
            title: "How to Create a Social Media Strategy That Actually Works".to_string(),
            category: "Digital Marketing".to_string(),
            excerpt: "Learn the step-by-step process to develop a social media strategy that drives engagement and conversions.".to_string(),
            image: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?auto=format&fit=crop&w=2374&q=80".to_string(),
            date: "July 5, 2023".to_string(),
            author: "Michael Chen".to_string(),
        },
        BlogPostPreview {
            id: 3,
            title: "UX Design Principles Every Website Owner Should Know".to_string(),
            category: "Web Design".to_string(),
            excerpt: "Explore essential UX design principles that can dramatically improve your website's performance and user satisfaction.".to_string(),
            image: "https://images.unsplash.com/photo-1587440871875-191322ee64b0?auto=format&fit=crop&w=2371&q=80".to_string(),
            date: "August 17, 2023".to_string(),
            author: "Alex Rodriguez".to_string(),
        },
    ]
}
