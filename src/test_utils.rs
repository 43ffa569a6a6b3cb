use crate::models::domain::{Answer, Question, QuestionOption, Subject};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Four-option question with "A" as the answer key.
    pub fn question(id: &str, subject: Subject, correct: &str, marks: f64) -> Question {
        Question {
            id: id.to_string(),
            question_number: 1,
            question_text: format!("question text for {}", id),
            options: ["A", "B", "C", "D"]
                .iter()
                .map(|label| QuestionOption {
                    label: label.to_string(),
                    text: format!("option {}", label),
                })
                .collect(),
            correct_answer: correct.to_string(),
            marks,
            subject,
            part: subject.default_part().to_string(),
            set_number: 1,
        }
    }

    pub fn answer(question_id: &str, selected: &str) -> Answer {
        Answer {
            question_id: question_id.to_string(),
            selected_answer: selected.to_string(),
        }
    }
}
