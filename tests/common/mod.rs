#![allow(dead_code)]

use axum_test::TestServer;
use noteful_api::routes::build_router;
use noteful_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const XSS_NAME: &str = r#"Naughty naughty very naughty <script>alert("xss");</script>"#;
pub const XSS_NAME_SANITIZED: &str =
    r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#;
pub const XSS_CONTENT: &str = r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#;
pub const XSS_CONTENT_SANITIZED: &str = r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#;

pub async fn create_test_folder(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO folder (folder_name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_note(
    pool: &PgPool,
    name: &str,
    content: Option<&str>,
    folder_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO note (note_name, content, folder_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(content)
    .bind(folder_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts the standard three folders and returns their ids in order.
pub async fn seed_folders(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::new();
    for name in ["Important", "Super", "Spangley"] {
        ids.push(create_test_folder(pool, name).await);
    }
    ids
}

/// Inserts three folders and one note per folder; returns the note ids.
pub async fn seed_notes(pool: &PgPool) -> Vec<i64> {
    let folders = seed_folders(pool).await;
    let mut ids = Vec::new();
    for (i, (name, folder_id)) in ["Dogs", "Cats", "Pigs"].iter().zip(folders).enumerate() {
        let content = format!("Note {} content", i + 1);
        ids.push(create_test_note(pool, name, Some(&content), folder_id).await);
    }
    ids
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    let app = build_router(state, &["*".to_string()]);
    TestServer::new(app).unwrap()
}
