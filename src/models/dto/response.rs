use serde::Serialize;

use crate::models::domain::{Question, QuestionOption, Subject, User};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// A question as served to test-takers: everything except the answer key.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub question_number: u32,
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    pub marks: f64,
    pub subject: Subject,
    pub part: String,
    pub set_number: u32,
}

impl From<Question> for PublicQuestion {
    fn from(question: Question) -> Self {
        PublicQuestion {
            id: question.id,
            question_number: question.question_number,
            question_text: question.question_text,
            options: question.options,
            marks: question.marks,
            subject: question.subject,
            part: question.part,
            set_number: question.set_number,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleQuestionsResponse {
    pub questions: Vec<PublicQuestion>,
    pub total_marks: f64,
    pub time_limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FullQuestionsResponse {
    pub tamil_questions: Vec<PublicQuestion>,
    pub physics_questions: Vec<PublicQuestion>,
    pub total_marks: f64,
    pub time_limit: u32,
}

/// Per-question breakdown returned (and only returned, never persisted)
/// alongside the attempt totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub question_number: u32,
    pub question_text: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub marks: f64,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitTestResponse {
    pub attempt_id: String,
    pub score: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub detailed_results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub set_number: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessCheckResponse {
    pub has_access: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_attempts: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSummary {
    pub set_number: u32,
    pub tamil_questions: u64,
    pub physics_questions: u64,
    pub total_questions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkInsertResponse {
    pub inserted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSetResponse {
    pub message: String,
    pub deleted: u64,
}
