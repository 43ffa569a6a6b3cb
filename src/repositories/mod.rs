pub mod access_repository;
pub mod attempt_repository;
pub mod feedback_repository;
pub mod question_repository;
pub mod study_material_repository;
pub mod user_repository;

pub use access_repository::{AccessRepository, MongoAccessRepository};
pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use feedback_repository::{FeedbackRepository, MongoFeedbackRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use study_material_repository::{MongoStudyMaterialRepository, StudyMaterialRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
