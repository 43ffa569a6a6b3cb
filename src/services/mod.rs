pub mod admin_service;
pub mod feedback_service;
pub mod material_service;
pub mod payment_service;
pub mod question_service;
pub mod scoring_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use feedback_service::FeedbackService;
pub use material_service::MaterialService;
pub use payment_service::PaymentService;
pub use question_service::QuestionService;
pub use scoring_service::ScoringService;
pub use user_service::UserService;
