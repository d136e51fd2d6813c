use sitecms_types::{FooterDocument, FooterLink, FooterSection, SocialLinks};

fn link(id: u64, title: &str, url: &str, is_external: bool) -> FooterLink {
    FooterLink {
        id,
        title: title.to_string(),
        url: url.to_string(),
        is_external,
    }
}

fn section(id: u64, title: &str, links: Vec<FooterLink>) -> FooterSection {
    FooterSection {
        id,
        title: title.to_string(),
        links,
    }
}

/// The footer shown before an operator has edited anything. Link ids are
/// unique across the whole document (1..=27), matching the id policy the
/// footer editor allocates with.
#[must_use]
pub fn default_footer() -> FooterDocument {
    FooterDocument {
        sections: vec![
            section(1, "EXPLORE", vec![
                link(1, "About Us", "/about", false),
                link(2, "Our Mission", "/mission", false),
                link(3, "Meet the Team", "/team", false),
                link(4, "Success Stories", "/success-stories", false),
                link(5, "Collaborations", "/collaborations", false),
            ]),
            section(2, "SERVICES", vec![
                link(6, "Creative Collaborations", "/services/collaborations", false),
                link(7, "Branding & Visual Identity", "/services/branding", false),
                link(8, "Workshops & Masterclasses", "/services/workshops", false),
                link(9, "Consultation Services", "/services/consultation", false),
                link(10, "Art Exhibitions", "/services/exhibitions", false),
                link(11, "Online Community", "/services/community", false),
            ]),
            section(3, "CONNECT", vec![
                link(12, "Contact Us", "/contact", false),
                link(13, "Join Our Newsletter", "/newsletter", false),
                link(14, "Follow Us on Instagram", "https://instagram.com/zoolyum", true),
                link(15, "Like Us on Facebook", "https://facebook.com/zoolyum", true),
                link(16, "Subscribe on YouTube", "https://youtube.com/zoolyum", true),
            ]),
            section(4, "RESOURCES", vec![
                link(17, "Blog", "/blog", false),
                link(18, "Creative Tools", "/tools", false),
                link(19, "Industry Trends", "/industry", false),
                link(20, "Event Calendar", "/events", false),
                link(21, "FAQs", "/faq", false),
            ]),
            section(5, "LEGAL", vec![
                link(22, "Terms of Service", "/terms", false),
                link(23, "Privacy Policy", "/privacy", false),
                link(24, "Cookie Policy", "/cookies", false),
                link(25, "Refund Policy", "/refund", false),
                link(26, "Copyright Information", "/copyright", false),
                link(27, "Disclaimer", "/disclaimer", false),
            ]),
        ],
        copyright: "© 2024 By Zoolyum. All Rights Reserved.".to_string(),
        social_links: SocialLinks {
            facebook: "https://facebook.com/zoolyum".to_string(),
            twitter: "https://twitter.com/zoolyum".to_string(),
            linkedin: "https://linkedin.com/company/zoolyum".to_string(),
            instagram: "https://instagram.com/zoolyum".to_string(),
        },
    }
}
