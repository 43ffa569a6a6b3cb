pub mod feedback;
pub mod purchased_access;
pub mod question;
pub mod study_material;
pub mod test_attempt;
pub mod user;

pub use feedback::Feedback;
pub use purchased_access::PurchasedAccess;
pub use question::{Question, QuestionOption, Subject};
pub use study_material::StudyMaterial;
pub use test_attempt::{Answer, TestAttempt, TestType};
pub use user::User;
