use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, Subject},
    models::dto::request::{BulkQuestionsRequest, UpdateQuestionRequest},
    models::dto::response::{
        FullQuestionsResponse, PublicQuestion, SampleQuestionsResponse, SetSummary,
    },
    repositories::QuestionRepository,
};

pub const SAMPLE_QUESTION_COUNT: usize = 10;

// The declared totals and time limits are fixed paper-level values, not
// derived from the marks actually present in the store.
pub const SAMPLE_TOTAL_MARKS: f64 = 15.0;
pub const SAMPLE_TIME_LIMIT_SECS: u32 = 900;
pub const FULL_TOTAL_MARKS: f64 = 200.0;
pub const FULL_TIME_LIMIT_SECS: u32 = 10800;

/// Serves question papers to test-takers and manages the question bank
/// for the admin dashboard.
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Ten physics questions drawn uniformly at random without
    /// replacement, or the whole pool when it holds fewer than ten.
    pub async fn sample_question_set(&self) -> AppResult<SampleQuestionsResponse> {
        let mut pool = self.questions.find_by_subject(Subject::Physics).await?;

        let mut generator = rng();
        pool.shuffle(&mut generator);
        pool.truncate(SAMPLE_QUESTION_COUNT);

        Ok(SampleQuestionsResponse {
            questions: pool.into_iter().map(PublicQuestion::from).collect(),
            total_marks: SAMPLE_TOTAL_MARKS,
            time_limit: SAMPLE_TIME_LIMIT_SECS,
        })
    }

    /// The complete paper: every tamil and physics question on record.
    pub async fn full_question_set(&self) -> AppResult<FullQuestionsResponse> {
        let tamil = self.questions.find_by_subject(Subject::Tamil).await?;
        let physics = self.questions.find_by_subject(Subject::Physics).await?;

        Ok(FullQuestionsResponse {
            tamil_questions: tamil.into_iter().map(PublicQuestion::from).collect(),
            physics_questions: physics.into_iter().map(PublicQuestion::from).collect(),
            total_marks: FULL_TOTAL_MARKS,
            time_limit: FULL_TIME_LIMIT_SECS,
        })
    }

    /// Bulk insert for seeding a new set. All-or-nothing at the store's
    /// insert_many granularity.
    pub async fn bulk_insert(&self, request: BulkQuestionsRequest) -> AppResult<usize> {
        request.validate()?;

        let questions: Vec<Question> = request
            .questions
            .into_iter()
            .map(|input| input.into_question())
            .collect();

        for question in &questions {
            ensure_answer_key(question)?;
        }

        let inserted = self.questions.insert_many(questions).await?;
        log::info!("bulk inserted {} questions", inserted);
        Ok(inserted)
    }

    pub async fn list_by_set(&self, set_number: u32) -> AppResult<Vec<Question>> {
        self.questions.find_by_set(set_number).await
    }

    pub async fn update_question(
        &self,
        id: &str,
        request: UpdateQuestionRequest,
    ) -> AppResult<Question> {
        request.validate()?;

        let mut question = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))?;

        question.question_text = request.question_text;
        question.options = request.options;
        question.correct_answer = request.correct_answer;
        question.marks = request.marks;

        ensure_answer_key(&question)?;

        self.questions.update(question).await
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.questions.delete(id).await
    }

    pub async fn delete_set(&self, set_number: u32) -> AppResult<u64> {
        let deleted = self.questions.delete_by_set(set_number).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Question set {} not found",
                set_number
            )));
        }
        log::info!("deleted set {} ({} questions)", set_number, deleted);
        Ok(deleted)
    }

    pub async fn question_sets(&self) -> AppResult<Vec<SetSummary>> {
        let set_numbers = self.questions.list_set_numbers().await?;

        let mut summaries = Vec::with_capacity(set_numbers.len());
        for set_number in set_numbers {
            let tamil = self
                .questions
                .count_by_set_and_subject(set_number, Subject::Tamil)
                .await?;
            let physics = self
                .questions
                .count_by_set_and_subject(set_number, Subject::Physics)
                .await?;
            summaries.push(SetSummary {
                set_number,
                tamil_questions: tamil,
                physics_questions: physics,
                total_questions: tamil + physics,
            });
        }
        Ok(summaries)
    }
}

fn ensure_answer_key(question: &Question) -> AppResult<()> {
    if question.has_valid_answer_key() {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "correct_answer '{}' does not match any option label on question '{}'",
            question.correct_answer, question.id
        )))
    }
}
