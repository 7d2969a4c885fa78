mod common;

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use serde_json::{Value, json};
use sqlx::PgPool;

fn location(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_folder_list_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/folder").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_folder_list_returns_all_in_id_order(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server.get("/api/folder").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": ids[0], "folder_name": "Important" },
        { "id": ids[1], "folder_name": "Super" },
        { "id": ids[2], "folder_name": "Spangley" },
    ]));
}

#[sqlx::test]
async fn test_folder_list_sanitizes_xss(pool: PgPool) {
    common::create_test_folder(&pool, common::XSS_NAME).await;
    let server = common::make_server(pool);

    let response = server.get("/api/folder").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body[0]["folder_name"], common::XSS_NAME_SANITIZED);
}

// ─── GET BY ID ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_folder_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/folder/123456").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": { "message": "Folder doesn't exist" } }));
}

#[sqlx::test]
async fn test_get_folder_non_numeric_id_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/folder/abc").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": { "message": "Folder doesn't exist" } }));
}

#[sqlx::test]
async fn test_get_folder_success(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/api/folder/{}", ids[1])).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": ids[1], "folder_name": "Super" }));
}

#[sqlx::test]
async fn test_get_folder_sanitizes_xss(pool: PgPool) {
    let id = common::create_test_folder(&pool, common::XSS_NAME).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/api/folder/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["folder_name"],
        common::XSS_NAME_SANITIZED
    );
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_folder_success(pool: PgPool) {
    common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/folder")
        .json(&json!({ "folder_name": "new test folder" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["folder_name"], "new test folder");
    let id = body["id"].as_i64().unwrap();
    assert_eq!(location(&response), format!("/api/folder/{id}"));

    let fetched = server.get(&location(&response)).await;
    fetched.assert_status_ok();
    fetched.assert_json(&body);
}

#[sqlx::test]
async fn test_create_folder_missing_name(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.post("/api/folder").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Missing 'folder_name' in request body" }
    }));
}

#[sqlx::test]
async fn test_create_folder_null_name(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/folder")
        .json(&json!({ "folder_name": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Missing 'folder_name' in request body" }
    }));
}

#[sqlx::test]
async fn test_create_folder_without_body(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.post("/api/folder").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Missing 'folder_name' in request body" }
    }));
}

#[sqlx::test]
async fn test_create_folder_empty_json_body(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/folder")
        .bytes(Bytes::new())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Missing 'folder_name' in request body" }
    }));
}

#[sqlx::test]
async fn test_create_folder_wrong_type(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/folder")
        .json(&json!({ "folder_name": 42 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]["message"].is_string());
}

#[sqlx::test]
async fn test_create_folder_sanitizes_response_but_stores_raw(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/folder")
        .json(&json!({ "folder_name": common::XSS_NAME }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["folder_name"], common::XSS_NAME_SANITIZED);

    let stored: String = sqlx::query_scalar("SELECT folder_name FROM folder WHERE id = $1")
        .bind(body["id"].as_i64().unwrap())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, common::XSS_NAME);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_folder_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.delete("/api/folder/123456").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": { "message": "Folder doesn't exist" } }));
}

#[sqlx::test]
async fn test_delete_folder_success(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server.delete(&format!("/api/folder/{}", ids[1])).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    server.get("/api/folder").await.assert_json(&json!([
        { "id": ids[0], "folder_name": "Important" },
        { "id": ids[2], "folder_name": "Spangley" },
    ]));
}

#[sqlx::test]
async fn test_delete_folder_cascades_to_notes(pool: PgPool) {
    let note_ids = common::seed_notes(&pool).await;
    let server = common::make_server(pool);

    // One note per folder.
    let note = server
        .get(&format!("/api/note/{}", note_ids[1]))
        .await
        .json::<Value>();
    let folder_id = note["folder_id"].as_i64().unwrap();

    server
        .delete(&format!("/api/folder/{folder_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let notes = server.get("/api/note").await.json::<Value>();
    let remaining: Vec<i64> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(remaining, vec![note_ids[0], note_ids[2]]);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_folder_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.patch("/api/folder/123456").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": { "message": "Folder doesn't exist" } }));
}

#[sqlx::test]
async fn test_update_folder_not_found_outranks_bad_body(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .patch("/api/folder/123456")
        .json(&json!({ "folder_name": ["not", "a", "string"] }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_update_folder_success(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/api/folder/{}", ids[1]))
        .json(&json!({ "folder_name": "updated folder name" }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/folder/{}", ids[1]))
        .await
        .assert_json(&json!({ "id": ids[1], "folder_name": "updated folder name" }));
}

#[sqlx::test]
async fn test_update_folder_no_recognized_fields(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/api/folder/{}", ids[1]))
        .json(&json!({ "irrelevantField": "foo" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Request body must contain 'folder_name'" }
    }));
}

#[sqlx::test]
async fn test_update_folder_without_body(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server.patch(&format!("/api/folder/{}", ids[0])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Request body must contain 'folder_name'" }
    }));
}

#[sqlx::test]
async fn test_update_folder_empty_json_body(pool: PgPool) {
    let ids = common::seed_folders(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/api/folder/{}", ids[0]))
        .bytes(Bytes::new())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": { "message": "Request body must contain 'folder_name'" }
    }));
}
