//! End-to-end tests for the trivia service against a real database.

mod common;

use axum::http::StatusCode;
use common::{assert_envelope, body_json, build_trivia_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_category(pool: &PgPool, kind: &str) -> i64 {
    let row: (i64,) = sqlx::query_as("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

async fn seed_question(pool: &PgPool, text: &str, category: i64) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES ($1, 'answer', $2, 2) RETURNING id",
    )
    .bind(text)
    .bind(category)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn categories_are_returned_as_id_map(pool: PgPool) {
    let science = seed_category(&pool, "Science").await;
    let art = seed_category(&pool, "Art").await;

    let response = get(build_trivia_app(pool), "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["categories"][science.to_string()], "Science");
    assert_eq!(json["categories"][art.to_string()], "Art");
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn category_questions_are_filtered(pool: PgPool) {
    let science = seed_category(&pool, "Science").await;
    let art = seed_category(&pool, "Art").await;
    let q1 = seed_question(&pool, "What is H2O?", science).await;
    seed_question(&pool, "Who painted it?", art).await;

    let response = get(
        build_trivia_app(pool),
        &format!("/categories/{science}/questions"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![q1]);
    assert_eq!(json["totalQuestions"], 1);
    assert_eq!(json["currentCategory"], "Science");
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn unknown_category_questions_is_404(pool: PgPool) {
    let response = get(build_trivia_app(pool), "/categories/999/questions").await;
    assert_envelope(response, StatusCode::NOT_FOUND, "resource not found").await;
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn pages_slice_the_id_ordered_questions(pool: PgPool) {
    let cat = seed_category(&pool, "History").await;
    let mut all = Vec::new();
    for n in 0..25 {
        all.push(seed_question(&pool, &format!("Question {n}"), cat).await);
    }
    let app = build_trivia_app(pool);

    let first = body_json(get(app.clone(), "/questions").await).await;
    assert_eq!(ids(&first), all[0..10].to_vec());
    assert_eq!(first["total_questions"], 25);
    assert_eq!(first["categories"][cat.to_string()], "History");
    assert!(first["current_category"].is_null());

    let third = body_json(get(app.clone(), "/questions?page=3").await).await;
    assert_eq!(ids(&third), all[20..25].to_vec());

    let past_end = get(app, "/questions?page=4").await;
    assert_envelope(past_end, StatusCode::NOT_FOUND, "resource not found").await;
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn non_integer_page_serves_first_page(pool: PgPool) {
    let cat = seed_category(&pool, "Geography").await;
    let mut all = Vec::new();
    for n in 0..12 {
        all.push(seed_question(&pool, &format!("Where is {n}?"), cat).await);
    }

    let response = get(build_trivia_app(pool), "/questions?page=abc").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), all[0..10].to_vec());
    assert_eq!(json["total_questions"], 12);
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn empty_bank_first_page_is_404(pool: PgPool) {
    let response = get(build_trivia_app(pool), "/questions?page=1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn create_question_returns_new_id(pool: PgPool) {
    let cat = seed_category(&pool, "Sports").await;
    let app = build_trivia_app(pool.clone());

    let body = json!({
        "question": "How many players on a team?",
        "answer": "Eleven",
        "difficulty": "3",
        "category": cat.to_string(),
    });
    let response = post_json(app, "/questions", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let created = json["created"].as_i64().unwrap();

    let stored: (String, i32) =
        sqlx::query_as("SELECT answer, difficulty FROM questions WHERE id = $1")
            .bind(created)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, ("Eleven".to_string(), 3));
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn create_question_in_unknown_category_is_422(pool: PgPool) {
    let body = json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": 999});

    let response = post_json(build_trivia_app(pool), "/questions", body).await;

    assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn delete_question_then_delete_again(pool: PgPool) {
    let cat = seed_category(&pool, "Art").await;
    let id = seed_question(&pool, "Who painted the Mona Lisa?", cat).await;
    let app = build_trivia_app(pool);

    let first = delete(app.clone(), &format!("/questions/{id}")).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, json!({"success": true, "deleted": id}));

    let second = delete(app, &format!("/questions/{id}")).await;
    assert_envelope(second, StatusCode::NOT_FOUND, "resource not found").await;
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn search_is_case_insensitive(pool: PgPool) {
    let cat = seed_category(&pool, "Literature").await;
    let hit = seed_question(&pool, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", cat).await;
    let titled = seed_question(&pool, "What was the Title of the first book?", cat).await;
    seed_question(&pool, "Who wrote Hamlet?", cat).await;

    let response = post_json(
        build_trivia_app(pool),
        "/questions/search",
        json!({"searchTerm": "title"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![hit, titled]);
    assert_eq!(json["totalQuestions"], 2);
    assert!(json["currentCategory"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn search_with_no_matches_is_empty_success(pool: PgPool) {
    let response = post_json(
        build_trivia_app(pool),
        "/questions/search",
        json!({"searchTerm": "zzz"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalQuestions"], 0);
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn quiz_never_repeats_and_ends_with_null(pool: PgPool) {
    let science = seed_category(&pool, "Science").await;
    let art = seed_category(&pool, "Art").await;
    let s1 = seed_question(&pool, "s1", science).await;
    let s2 = seed_question(&pool, "s2", science).await;
    seed_question(&pool, "a1", art).await;
    let app = build_trivia_app(pool);

    let mut served = Vec::new();
    for _ in 0..2 {
        let body = json!({
            "previous_questions": served,
            "quiz_category": {"id": science.to_string(), "type": "Science"},
        });
        let json = body_json(post_json(app.clone(), "/quizzes", body).await).await;
        let id = json["question"]["id"].as_i64().unwrap();
        assert!(!served.contains(&id));
        served.push(id);
    }
    served.sort_unstable();
    assert_eq!(served, vec![s1, s2]);

    let body = json!({"previous_questions": served, "quiz_category": {"id": science}});
    let json = body_json(post_json(app, "/quizzes", body).await).await;
    assert_eq!(json["success"], true);
    assert!(json["question"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations/trivia")]
async fn quiz_category_zero_draws_from_all(pool: PgPool) {
    let science = seed_category(&pool, "Science").await;
    let art = seed_category(&pool, "Art").await;
    let s1 = seed_question(&pool, "s1", science).await;
    let a1 = seed_question(&pool, "a1", art).await;

    let body = json!({"previous_questions": [s1], "quiz_category": {"id": 0, "type": "click"}});
    let json = body_json(post_json(build_trivia_app(pool), "/quizzes", body).await).await;

    assert_eq!(json["question"]["id"], a1);
}
