use quizbar_api::auth::verifier_from_config;
use quizbar_api::config::{AuthConfig, ServerConfig, DEFAULT_COFFEE_PORT};
use quizbar_api::router::build_coffee_router;
use quizbar_api::server;
use quizbar_api::state::CoffeeState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let config = ServerConfig::from_env(DEFAULT_COFFEE_PORT);
    let auth_config = AuthConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let verifier = verifier_from_config(&auth_config).expect("Invalid auth configuration");
    tracing::info!(audience = %auth_config.audience, issuer = %auth_config.issuer, "Token verifier ready");

    let pool = quizbar_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    quizbar_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    quizbar_db::run_coffee_migrations(&pool)
        .await
        .expect("Failed to run coffee migrations");
    tracing::info!("Coffee migrations applied");

    let state = CoffeeState {
        pool,
        verifier,
    };
    let app = build_coffee_router(state, &config);

    server::serve(app, &config).await;
}
