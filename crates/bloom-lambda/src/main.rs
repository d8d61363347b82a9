use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("BLOOM_BUCKET").unwrap_or_else(|_| "bloom".to_string());
    let jwt_secret = env::var("BLOOM_JWT_SECRET")
        .map_err(|_| eyre::eyre!("BLOOM_JWT_SECRET must be set"))?;
    let chat_model_id = env::var("BLOOM_CHAT_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-3-5-haiku-20241022-v1:0".to_string());

    let aws_config = bloom_storage::client::load_config().await;
    let s3 = bloom_storage::client::build_client(&aws_config);

    let state = AppState {
        s3,
        bucket,
        aws_config,
        jwt_secret,
        chat_model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        // Question bank (no auth — public schema data)
        .route("/questions", get(routes::questions::list_questions))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login));

    let protected = Router::new()
        .route(
            "/assessments",
            get(routes::assessments::list_assessments)
                .post(routes::assessments::submit_assessment),
        )
        .route(
            "/assessments/{user_id}/{id}",
            get(routes::assessments::get_assessment),
        )
        .route("/analytics", get(routes::analytics::get_analytics))
        .route("/reports/{user_id}", get(routes::reports::get_report))
        .route(
            "/chat",
            get(routes::chat::list_messages).post(routes::chat::post_message),
        )
        .route("/chat/ai", post(routes::chat::ai_reply))
        .route("/support", post(routes::support::register))
        .route(
            "/support/{user_id}",
            get(routes::support::get_registration).put(routes::support::update_registration),
        )
        .route("/students", get(routes::students::list_students))
        .route(
            "/students/available",
            get(routes::students::list_available_students),
        )
        .route(
            "/bookings",
            get(routes::bookings::list_bookings).post(routes::bookings::create_booking),
        )
        .route("/users", get(routes::users::list_users))
        .route("/users/{id}", get(routes::users::get_user))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
