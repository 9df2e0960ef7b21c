//! HTTP-level integration tests for the `/transactions` ledger.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_case, create_client, get, get_auth, lawyer_session, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_and_filter_transactions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;
    let client_id = create_client(app.clone(), &cookie, "Carla Ruiz", "carla@mail.test").await;
    let case = create_case(app.clone(), &cookie, "FOR-1", client_id, "pending").await;

    let response = post_json_auth(
        app.clone(),
        "/api/transactions",
        &cookie,
        serde_json::json!({
            "type": "income",
            "concept": "Retainer",
            "amount": 900.0,
            "case_id": case["id"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["transaction"]["type"], "income");
    assert_eq!(json["transaction"]["amount"], 900.0);
    assert!(json["transaction"]["user_id"].is_number());

    post_json_auth(
        app.clone(),
        "/api/transactions",
        &cookie,
        serde_json::json!({ "type": "expense", "concept": "Write blocker", "amount": 150.0 }),
    )
    .await;

    let json = body_json(get_auth(app.clone(), "/api/transactions", &cookie).await).await;
    assert_eq!(json["total"], 2);

    let json = body_json(get_auth(app.clone(), "/api/transactions?type=expense", &cookie).await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["concept"], "Write blocker");

    let uri = format!("/api/transactions?case_id={}", case["id"]);
    let json = body_json(get_auth(app, &uri, &cookie).await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["concept"], "Retainer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transaction_rejections(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app.clone(), "/api/transactions").await.status(), StatusCode::UNAUTHORIZED);

    let cookie = lawyer_session(&pool, app.clone()).await;

    let bad_bodies = [
        serde_json::json!({ "type": "gift", "concept": "X", "amount": 1.0 }),
        serde_json::json!({ "type": "income", "amount": 1.0 }),
        serde_json::json!({ "type": "income", "concept": "X" }),
    ];
    for body in bad_bodies {
        let response = post_json_auth(app.clone(), "/api/transactions", &cookie, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }

    let response = post_json_auth(
        app.clone(),
        "/api/transactions",
        &cookie,
        serde_json::json!({ "type": "income", "concept": "X", "amount": 1.0, "case_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/transactions?type=gift", &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
