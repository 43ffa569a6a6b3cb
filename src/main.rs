use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use examprep_server::{
    app_state::AppState,
    config::Config,
    handlers::{
        admin_handler, auth_handler, feedback_handler, material_handler, payment_handler,
        question_handler, stats_handler, test_handler,
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origins = config.cors_origins.clone();

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let mut cors = Cors::default().allow_any_method().allow_any_header();
        if cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
            cors = cors.supports_credentials();
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(auth_handler::register)
            .service(auth_handler::login)
            .service(question_handler::sample_questions)
            .service(question_handler::full_questions)
            .service(test_handler::submit_test)
            .service(payment_handler::verify_payment)
            .service(payment_handler::check_access)
            .service(material_handler::list_materials)
            .service(material_handler::create_material)
            .service(material_handler::update_material)
            .service(material_handler::delete_material)
            .service(feedback_handler::submit_feedback)
            .service(stats_handler::get_stats)
            .service(stats_handler::health_check)
            .service(stats_handler::health_check_ready)
            .service(admin_handler::admin_login)
            .service(admin_handler::bulk_insert_questions)
            .service(admin_handler::list_questions)
            .service(admin_handler::update_question)
            .service(admin_handler::delete_question)
            .service(admin_handler::list_question_sets)
            .service(admin_handler::delete_question_set)
            .service(admin_handler::list_test_attempts)
            .service(admin_handler::list_users)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
