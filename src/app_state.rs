use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAccessRepository, MongoAttemptRepository, MongoFeedbackRepository,
        MongoQuestionRepository, MongoStudyMaterialRepository, MongoUserRepository,
    },
    services::{
        AdminService, FeedbackService, MaterialService, PaymentService, QuestionService,
        ScoringService, UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub user_service: Arc<UserService>,
    pub question_service: Arc<QuestionService>,
    pub scoring_service: Arc<ScoringService>,
    pub payment_service: Arc<PaymentService>,
    pub material_service: Arc<MaterialService>,
    pub feedback_service: Arc<FeedbackService>,
    pub admin_service: Arc<AdminService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        let question_service = Arc::new(QuestionService::new(question_repository.clone()));

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;
        let scoring_service = Arc::new(ScoringService::new(
            question_repository,
            attempt_repository.clone(),
        ));

        let access_repository = Arc::new(MongoAccessRepository::new(&db));
        access_repository.ensure_indexes().await?;
        let payment_service = Arc::new(PaymentService::new(
            access_repository,
            config.razorpay_key_secret.clone(),
        ));

        let material_repository = Arc::new(MongoStudyMaterialRepository::new(&db));
        let material_service = Arc::new(MaterialService::new(material_repository));

        let feedback_repository = Arc::new(MongoFeedbackRepository::new(&db));
        let feedback_service = Arc::new(FeedbackService::new(feedback_repository));

        let admin_service = Arc::new(AdminService::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
            attempt_repository,
        ));

        Ok(Self {
            db,
            user_service,
            question_service,
            scoring_service,
            payment_service,
            material_service,
            feedback_service,
            admin_service,
            config: Arc::new(config),
        })
    }
}
