use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{Answer, Question, QuestionOption, Subject, TestType};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// One full answer sheet. Answers may reference question ids that no
/// longer exist in the store; scoring skips those rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct TestSubmission {
    #[serde(default)]
    pub user_id: Option<String>,
    pub test_type: TestType,
    pub answers: Vec<Answer>,
    pub time_taken: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentVerificationRequest {
    #[validate(length(min = 1))]
    pub razorpay_order_id: String,

    #[validate(length(min = 1))]
    pub razorpay_payment_id: String,

    #[validate(length(min = 1))]
    pub razorpay_signature: String,

    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(range(min = 1))]
    pub set_number: u32,
}

/// Admin-supplied question document. Unknown JSON fields are ignored by
/// design; the fields below are the validated schema.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionInput {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(range(min = 1))]
    pub question_number: u32,

    #[validate(length(min = 1))]
    pub question_text: String,

    #[validate(length(min = 2))]
    pub options: Vec<QuestionOption>,

    #[validate(length(min = 1))]
    pub correct_answer: String,

    #[validate(range(min = 0.0))]
    pub marks: f64,

    pub subject: Subject,

    #[serde(default)]
    pub part: Option<String>,

    #[validate(range(min = 1))]
    pub set_number: u32,
}

impl QuestionInput {
    pub fn into_question(self) -> Question {
        let part = self
            .part
            .unwrap_or_else(|| self.subject.default_part().to_string());
        Question {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            question_number: self.question_number,
            question_text: self.question_text,
            options: self.options,
            correct_answer: self.correct_answer,
            marks: self.marks,
            subject: self.subject,
            part,
            set_number: self.set_number,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkQuestionsRequest {
    #[validate(length(min = 1), nested)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1))]
    pub question_text: String,

    #[validate(length(min = 2))]
    pub options: Vec<QuestionOption>,

    #[validate(length(min = 1))]
    pub correct_answer: String,

    #[validate(range(min = 0.0))]
    pub marks: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudyMaterialRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: String,

    pub subject: Subject,

    pub content: String,

    #[validate(url)]
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,

    #[validate(range(min = 1, max = 5))]
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialQuery {
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminQuestionsQuery {
    pub set_number: u32,
}
