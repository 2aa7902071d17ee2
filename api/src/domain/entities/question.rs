//! Licensing questionnaire catalog
//!
//! A fixed, ordered set of questions the dashboard walks creators through
//! before license generation. The catalog is static data - there is exactly
//! one kind of question behavior, single- vs multi-select is a tag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a question accepts one option or several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
}

/// One questionnaire entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

/// A selected answer: one option for single-select questions, a list for
/// multi-select ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

/// Answers keyed by question id
///
/// BTreeMap keeps iteration (and thus the generated prompt) deterministic.
pub type Answers = BTreeMap<String, AnswerValue>;

static CATALOG: [Question; 7] = [
    Question {
        id: "content_type",
        question: "What kind of content do you mainly create?",
        options: &[
            "Original photography",
            "Design work",
            "Video content",
            "Written work",
            "Other",
        ],
        kind: QuestionKind::Single,
    },
    Question {
        id: "commercial_use",
        question: "May others use your work commercially?",
        options: &["Allow", "Do not allow", "Paid authorization only"],
        kind: QuestionKind::Single,
    },
    Question {
        id: "derivatives",
        question: "May others create derivative works from yours?",
        options: &["Allow", "Do not allow", "Non-commercial only"],
        kind: QuestionKind::Single,
    },
    Question {
        id: "attribution",
        question: "Must you be credited when your work is used?",
        options: &[
            "Attribution required",
            "Attribution preferred",
            "No attribution needed",
        ],
        kind: QuestionKind::Single,
    },
    Question {
        id: "territory",
        question: "Which regions does the license cover?",
        options: &["Worldwide", "Mainland China", "Asia", "Custom"],
        kind: QuestionKind::Multiple,
    },
    Question {
        id: "channels",
        question: "Where may your work be used?",
        options: &[
            "Social media",
            "Websites and blogs",
            "Print media",
            "Advertising",
            "E-commerce",
        ],
        kind: QuestionKind::Multiple,
    },
    Question {
        id: "timeframe",
        question: "How long should the license last?",
        options: &["1 year", "3 years", "5 years", "Perpetual", "Custom"],
        kind: QuestionKind::Single,
    },
];

/// The fixed questionnaire, in presentation order
pub fn question_catalog() -> &'static [Question] {
    &CATALOG
}
