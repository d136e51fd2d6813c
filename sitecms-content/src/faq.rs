use sitecms_types::FaqItem;

fn item(id: u64, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// The FAQ entries shown before an operator has edited anything.
#[must_use]
pub fn default_faq() -> Vec<FaqItem> {
    vec![
        item(
            1,
            "What services does Zoolyum offer?",
            "Zoolyum offers a comprehensive range of creative and digital services including branding, web design and development, digital marketing, content creation, and strategic consulting tailored to meet your business needs.",
        ),
        item(
            2,
            "How does the creative process work?",
            "Our creative process begins with understanding your business goals, followed by research, strategy development, concept creation, execution, and continuous refinement. We maintain open communication throughout the entire journey to ensure your vision is achieved.",
        ),
        item(
            3,
            "How long does a typical project take?",
            "Project timelines vary depending on complexity and scope. A simple website might take 4-6 weeks, while comprehensive branding projects can take 2-3 months. During our initial consultation, we'll provide a personalized timeline for your specific project.",
        ),
        item(
            4,
            "Do you work with businesses of all sizes?",
            "Yes! We work with businesses of all sizes, from startups to established enterprises. Our flexible approach allows us to tailor our services to match your specific needs and budget constraints.",
        ),
        item(
            5,
            "What makes Zoolyum different from other agencies?",
            "Zoolyum stands out through our strategic approach, creative excellence, and commitment to measurable results. We focus on building long-term partnerships rather than one-off projects, becoming an extension of your team dedicated to your ongoing success.",
        ),
    ]
}
