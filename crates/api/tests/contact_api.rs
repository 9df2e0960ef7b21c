//! HTTP-level integration tests for the public contact form and the
//! staff inbox.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, lawyer_session, post_json, put_json_auth};
use sqlx::PgPool;

fn message(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Elena Soto",
        "email": email,
        "subject": "Recover deleted photos",
        "message": "My phone was wiped, can you help?",
    })
}

/// Submit publicly, read it in the inbox, mark it read.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_inbox_flow(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app.clone(), "/api/contact", message("elena@mail.test")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Message sent. We will get in touch with you soon.");

    let cookie = lawyer_session(&pool, app.clone()).await;

    let response = get_auth(app.clone(), "/api/contact?unread_only=true", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    let item = &json["items"][0];
    assert_eq!(item["is_read"], false);
    let id = item["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/contact/{id}/read"),
        &cookie,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/contact?unread_only=true", &cookie).await;
    assert_eq!(body_json(response).await["total"], 0);

    let response = get_auth(app.clone(), "/api/contact", &cookie).await;
    assert_eq!(body_json(response).await["total"], 1);

    let response = get_auth(app, "/api/contact/stats", &cookie).await;
    let stats = body_json(response).await;
    assert_eq!(stats["total_messages"], 1);
    assert_eq!(stats["unread_messages"], 0);
    assert_eq!(stats["recent_messages"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_submissions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app.clone(), "/api/contact", message("not-an-email")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(app.clone(), "/api/contact", message(" elena@mail.test ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid email format");

    let response = post_json(
        app,
        "/api/contact",
        serde_json::json!({ "name": "Elena", "email": "elena@mail.test" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inbox_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    assert_eq!(get(app.clone(), "/api/contact").await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        get(app.clone(), "/api/contact/stats").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let cookie = lawyer_session(&pool, app.clone()).await;
    let response = put_json_auth(app, "/api/contact/999999/read", &cookie, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
