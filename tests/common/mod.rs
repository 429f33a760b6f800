use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use roster::router::init_router;
use roster::state::AppState;
use roster_config::CorsConfig;
use roster_models::Student;
use sqlx::SqlitePool;

#[allow(dead_code)]
pub fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_lookup(|_| None),
    };
    init_router(state)
}

/// Inserts a student directly, bypassing validation.
#[allow(dead_code)]
pub async fn insert_student(pool: &SqlitePool, id: i64, name: &str, email: &str, mobile: &str) {
    sqlx::query("INSERT INTO students (id, name, email, mobile) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(mobile)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts students with ids `1..=count` and valid field values.
#[allow(dead_code)]
pub async fn insert_students(pool: &SqlitePool, count: i64) {
    let names = [
        "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Dennis",
        "Niklaus",
    ];
    for id in 1..=count {
        let name = names[(id as usize - 1) % names.len()];
        insert_student(
            pool,
            id,
            &format!("{} Student", name),
            &format!("{}{}@gmail.com", name.to_lowercase(), id),
            &format!("98765432{:02}", id),
        )
        .await;
    }
}

#[allow(dead_code)]
pub async fn fetch_student(pool: &SqlitePool, id: i64) -> Option<Student> {
    sqlx::query_as::<_, Student>("SELECT id, name, email, mobile FROM students WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn count_students(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a urlencoded form POST. Values must not contain `&`, `=` or `+`.
#[allow(dead_code)]
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
