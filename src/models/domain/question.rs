use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// A single test question. Questions are created through bulk admin
/// insertion, mutated only by admin update, and never touched by
/// end-user flows.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_number: u32,
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    pub correct_answer: String,
    pub marks: f64,
    pub subject: Subject,
    pub part: String,
    pub set_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub label: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Tamil,
    Physics,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Tamil => "tamil",
            Subject::Physics => "physics",
        }
    }

    /// Exam paper part the subject belongs to in the printed layout.
    pub fn default_part(&self) -> &'static str {
        match self {
            Subject::Tamil => "A",
            Subject::Physics => "B",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tamil" => Ok(Subject::Tamil),
            "physics" => Ok(Subject::Physics),
            other => Err(AppError::ValidationError(format!(
                "unknown subject '{}'",
                other
            ))),
        }
    }
}

impl Question {
    /// Invariant: the answer key must name one of the option labels.
    pub fn has_valid_answer_key(&self) -> bool {
        self.options
            .iter()
            .any(|option| option.label == self.correct_answer)
    }
}
