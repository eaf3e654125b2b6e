use quizbar_api::config::{ServerConfig, DEFAULT_TRIVIA_PORT};
use quizbar_api::router::build_trivia_router;
use quizbar_api::server;
use quizbar_api::state::TriviaState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    server::init_tracing();

    let config = ServerConfig::from_env(DEFAULT_TRIVIA_PORT);
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = quizbar_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    quizbar_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    quizbar_db::run_trivia_migrations(&pool)
        .await
        .expect("Failed to run trivia migrations");
    tracing::info!("Trivia migrations applied");

    let state = TriviaState { pool };
    let app = build_trivia_router(state, &config);

    server::serve(app, &config).await;
}
