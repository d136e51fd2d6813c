use sitecms_types::{FaqItem, MissingField, Record};

fn faq(id: u64, q: &str, a: &str) -> FaqItem {
    FaqItem {
        id,
        question: q.to_string(),
        answer: a.to_string(),
    }
}

// ── Record trait ─────────────────────────────────────────────────

#[test]
fn faq_kind_label() {
    assert_eq!(FaqItem::kind(), "FAQ");
}

#[test]
fn faq_id_accessors() {
    let mut item = faq(7, "Q", "A");
    assert_eq!(Record::id(&item), 7);
    item.set_id(9);
    assert_eq!(item.id, 9);
}

#[test]
fn blank_faq_carries_given_id_and_empty_fields() {
    let item = FaqItem::blank(42);
    assert_eq!(item.id, 42);
    assert!(item.question.is_empty());
    assert!(item.answer.is_empty());
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn complete_faq_validates() {
    assert!(faq(1, "What?", "This.").validate().is_ok());
}

#[test]
fn empty_question_is_rejected() {
    assert_eq!(faq(1, "", "A").validate(), Err(MissingField("question")));
}

#[test]
fn empty_answer_is_rejected() {
    assert_eq!(faq(1, "Q", "").validate(), Err(MissingField("answer")));
}

#[test]
fn whitespace_only_field_is_rejected() {
    assert_eq!(faq(1, "   ", "A").validate(), Err(MissingField("question")));
}

#[test]
fn blank_record_fails_validation() {
    assert!(FaqItem::blank(1).validate().is_err());
}
