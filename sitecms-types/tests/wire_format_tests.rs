//! Pins the JSON wire format to the slot payloads the reference site
//! writes, so either implementation can read the other's data.

use sitecms_types::{
    BlogPostPreview, FaqItem, FooterDocument, FooterLink, FooterSection, SocialLinks, slots,
};

#[test]
fn slot_keys_match_reference() {
    assert_eq!(slots::FAQ, "faqData");
    assert_eq!(slots::FOOTER, "footerData");
    assert_eq!(slots::BLOG, "blogPosts");
}

#[test]
fn faq_item_field_names() {
    let json = r#"{"id":1,"question":"Q1","answer":"A1"}"#;
    let item: FaqItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.question, "Q1");
    assert_eq!(serde_json::to_string(&item).unwrap(), json);
}

#[test]
fn footer_link_uses_camel_case_is_external() {
    let json = r#"{"id":3,"title":"Blog","url":"/blog","isExternal":false}"#;
    let link: FooterLink = serde_json::from_str(json).unwrap();
    assert!(!link.is_external);
    assert_eq!(serde_json::to_string(&link).unwrap(), json);
}

#[test]
fn footer_document_uses_camel_case_social_links() {
    let doc = FooterDocument {
        sections: vec![FooterSection {
            id: 1,
            title: "EXPLORE".into(),
            links: vec![],
        }],
        copyright: "© 2024".into(),
        social_links: SocialLinks {
            facebook: "https://facebook.com/x".into(),
            ..SocialLinks::default()
        },
    };
    let value = serde_json::to_value(&doc).unwrap();
    assert!(value.get("socialLinks").is_some());
    assert!(value.get("social_links").is_none());
    assert_eq!(value["socialLinks"]["facebook"], "https://facebook.com/x");
}

#[test]
fn social_links_default_missing_platforms_to_empty() {
    let json = r#"{"facebook":"https://facebook.com/x"}"#;
    let links: SocialLinks = serde_json::from_str(json).unwrap();
    assert_eq!(links.facebook, "https://facebook.com/x");
    assert_eq!(links.twitter, "");
    assert_eq!(links.instagram, "");
}

#[test]
fn blog_post_round_trips_all_fields() {
    let json = r#"{"id":2,"title":"T","category":"C","excerpt":"E","image":"https://img","date":"July 5, 2023","author":"M. Chen"}"#;
    let post: BlogPostPreview = serde_json::from_str(json).unwrap();
    assert_eq!(post.date, "July 5, 2023");
    assert_eq!(serde_json::to_string(&post).unwrap(), json);
}

#[test]
fn missing_required_field_is_a_parse_failure() {
    // Shape checking happens through typed deserialization: an FAQ entry
    // without an answer is rejected, not silently defaulted.
    let json = r#"{"id":1,"question":"Q1"}"#;
    assert!(serde_json::from_str::<FaqItem>(json).is_err());
}

#[test]
fn collection_order_survives_round_trip() {
    let items = vec![
        FaqItem { id: 3, question: "c".into(), answer: "3".into() },
        FaqItem { id: 1, question: "a".into(), answer: "1".into() },
        FaqItem { id: 2, question: "b".into(), answer: "2".into() },
    ];
    let json = serde_json::to_string(&items).unwrap();
    let back: Vec<FaqItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, items);
}
