use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{Question, TestAttempt},
    models::dto::request::TestSubmission,
    models::dto::response::{QuestionResult, SubmitTestResponse},
    repositories::{AttemptRepository, QuestionRepository},
};

/// Scores submitted answer sheets against the question store and records
/// each run as an immutable attempt.
pub struct ScoringService {
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl ScoringService {
    pub fn new(questions: Arc<dyn QuestionRepository>, attempts: Arc<dyn AttemptRepository>) -> Self {
        Self {
            questions,
            attempts,
        }
    }

    /// Scores a submission and persists exactly one attempt record.
    ///
    /// Answers referencing unknown question ids are skipped entirely:
    /// they contribute neither to the score nor to the achievable total.
    /// This tolerates stale client state after an admin reshuffles a set.
    pub async fn score(&self, submission: TestSubmission) -> AppResult<SubmitTestResponse> {
        let mut seen = HashSet::new();
        let mut ids: Vec<String> = Vec::new();
        for answer in &submission.answers {
            if seen.insert(answer.question_id.as_str()) {
                ids.push(answer.question_id.clone());
            }
        }

        let questions = self.questions.find_by_ids(&ids).await?;
        let lookup: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        let mut score = 0.0;
        let mut total_marks = 0.0;
        let mut detailed_results = Vec::new();

        for answer in &submission.answers {
            let Some(question) = lookup.get(answer.question_id.as_str()) else {
                continue;
            };

            total_marks += question.marks;
            let is_correct = answer.selected_answer == question.correct_answer;
            if is_correct {
                score += question.marks;
            }

            detailed_results.push(QuestionResult {
                question_id: answer.question_id.clone(),
                question_number: question.question_number,
                question_text: question.question_text.clone(),
                selected_answer: answer.selected_answer.clone(),
                correct_answer: question.correct_answer.clone(),
                is_correct,
                marks: question.marks,
                options: question.options.clone(),
            });
        }

        let percentage = percentage(score, total_marks);

        let attempt = TestAttempt::new(
            submission.user_id,
            submission.test_type,
            submission.answers,
            score,
            total_marks,
            submission.time_taken,
        );
        let attempt = self.attempts.insert(attempt).await?;

        log::info!(
            "scored attempt {}: {}/{} ({}%)",
            attempt.id,
            score,
            total_marks,
            percentage
        );

        Ok(SubmitTestResponse {
            attempt_id: attempt.id,
            score,
            total_marks,
            percentage,
            detailed_results,
        })
    }
}

/// Percentage rounded to two decimal places; zero when nothing was
/// achievable (an all-unknown or empty submission).
pub(crate) fn percentage(score: f64, total_marks: f64) -> f64 {
    if total_marks > 0.0 {
        (score / total_marks * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    }
}
