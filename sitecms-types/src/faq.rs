use crate::record::{MissingField, Record};
use serde::{Deserialize, Serialize};

/// A single question/answer entry on the FAQ page.
///
/// Persisted to the `"faqData"` slot as a bare JSON array; array position
/// is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u64,
    pub question: String,
    pub answer: String,
}

impl Record for FaqItem {
    fn kind() -> &'static str {
        "FAQ"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn blank(id: u64) -> Self {
        Self {
            id,
            question: String::new(),
            answer: String::new(),
        }
    }

    fn validate(&self) -> Result<(), MissingField> {
        if self.question.trim().is_empty() {
            return Err(MissingField("question"));
        }
        if self.answer.trim().is_empty() {
            return Err(MissingField("answer"));
        }
        Ok(())
    }
}
