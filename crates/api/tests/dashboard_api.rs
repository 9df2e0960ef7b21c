//! HTTP-level integration tests for the `/dashboard` aggregates.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_case, create_client, get, get_auth, lawyer_session, post_json,
    post_json_auth,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/dashboard/stats",
        "/api/dashboard/recent-activity",
        "/api/dashboard/pending-cases",
        "/api/dashboard/charts/cases-by-month",
        "/api/dashboard/charts/cases-by-status",
        "/api/dashboard/charts/revenue-by-month",
    ] {
        assert_eq!(get(app.clone(), uri).await.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_dashboard(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;

    let stats = body_json(get_auth(app.clone(), "/api/dashboard/stats", &cookie).await).await;
    assert_eq!(stats["basic_stats"]["total_cases"], 0);
    assert_eq!(stats["financial"]["monthly_income"], 0.0);

    let activity =
        body_json(get_auth(app.clone(), "/api/dashboard/recent-activity", &cookie).await).await;
    assert_eq!(activity["activity"], serde_json::json!([]));

    let chart =
        body_json(get_auth(app, "/api/dashboard/charts/cases-by-status", &cookie).await).await;
    assert_eq!(chart["labels"], serde_json::json!([]));
    assert_eq!(chart["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_shape_and_counts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;
    let client_id = create_client(app.clone(), &cookie, "Carla Ruiz", "carla@mail.test").await;
    let case = create_case(app.clone(), &cookie, "FOR-1", client_id, "in_progress").await;
    create_case(app.clone(), &cookie, "FOR-2", client_id, "pending").await;
    create_case(app.clone(), &cookie, "FOR-3", client_id, "closed").await;

    post_json_auth(
        app.clone(),
        &format!("/api/cases/{}/equipment", case["id"]),
        &cookie,
        serde_json::json!({ "equipment_type": "laptop" }),
    )
    .await;
    for (kind, amount) in [("income", 1200.0), ("income", 300.5), ("expense", 80.0)] {
        let response = post_json_auth(
            app.clone(),
            "/api/transactions",
            &cookie,
            serde_json::json!({ "type": kind, "concept": "Fee", "amount": amount }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app, "/api/dashboard/stats", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;

    assert_eq!(stats["basic_stats"]["total_cases"], 3);
    assert_eq!(stats["basic_stats"]["active_cases"], 1);
    assert_eq!(stats["basic_stats"]["total_clients"], 1);
    assert_eq!(stats["basic_stats"]["total_equipment"], 1);
    assert_eq!(stats["case_stats"]["pending"], 1);
    assert_eq!(stats["case_stats"]["active"], 1);
    assert_eq!(stats["case_stats"]["closed"], 1);
    assert_eq!(stats["recent_activity"]["new_cases_week"], 3);
    assert_eq!(stats["recent_activity"]["new_clients_week"], 1);
    assert_eq!(stats["financial"]["monthly_income"], 1500.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_activity_is_capped_and_sorted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;

    let mut client_ids = Vec::new();
    for n in 0..6 {
        let id = create_client(
            app.clone(),
            &cookie,
            &format!("Client {n}"),
            &format!("c{n}@mail.test"),
        )
        .await;
        client_ids.push(id);
    }
    for n in 0..12 {
        create_case(app.clone(), &cookie, &format!("FOR-{n}"), client_ids[0], "pending").await;
    }
    for n in 0..3 {
        post_json(
            app.clone(),
            "/api/contact",
            serde_json::json!({
                "name": format!("Visitor {n}"),
                "email": format!("v{n}@mail.test"),
                "message": "Hello",
            }),
        )
        .await;
    }

    let response = get_auth(app, "/api/dashboard/recent-activity", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let feed = json["activity"].as_array().unwrap();

    assert_eq!(feed.len(), 15);
    let times: Vec<&str> = feed.iter().map(|i| i["time"].as_str().unwrap()).collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> =
        times.iter().map(|t| t.parse().unwrap()).collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]), "feed must be newest first");
    assert!(feed.iter().all(|i| i["type"].is_string() && i["description"].is_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_cases_excludes_closed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;
    let client_id = create_client(app.clone(), &cookie, "Carla Ruiz", "carla@mail.test").await;
    create_case(app.clone(), &cookie, "FOR-1", client_id, "pending").await;
    create_case(app.clone(), &cookie, "FOR-2", client_id, "closed").await;

    let response = get_auth(app, "/api/dashboard/pending-cases", &cookie).await;
    let json = body_json(response).await;
    let cases = json["pending_cases"].as_array().unwrap();

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["case_number"], "FOR-1");
    assert_eq!(cases[0]["client_name"], "Carla Ruiz");
    assert_eq!(cases[0]["days_open"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_charts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = lawyer_session(&pool, app.clone()).await;
    let client_id = create_client(app.clone(), &cookie, "Carla Ruiz", "carla@mail.test").await;
    create_case(app.clone(), &cookie, "FOR-1", client_id, "pending").await;
    create_case(app.clone(), &cookie, "FOR-2", client_id, "pending").await;
    create_case(app.clone(), &cookie, "FOR-3", client_id, "closed").await;
    post_json_auth(
        app.clone(),
        "/api/transactions",
        &cookie,
        serde_json::json!({ "type": "income", "concept": "Fee", "amount": 500.0 }),
    )
    .await;

    let this_month = chrono::Utc::now().format("%b %Y").to_string();

    let json =
        body_json(get_auth(app.clone(), "/api/dashboard/charts/cases-by-month", &cookie).await)
            .await;
    assert_eq!(json["labels"], serde_json::json!([this_month]));
    assert_eq!(json["data"], serde_json::json!([3]));

    let json =
        body_json(get_auth(app.clone(), "/api/dashboard/charts/revenue-by-month", &cookie).await)
            .await;
    assert_eq!(json["labels"], serde_json::json!([this_month]));
    assert_eq!(json["data"], serde_json::json!([500.0]));

    let json =
        body_json(get_auth(app, "/api/dashboard/charts/cases-by-status", &cookie).await).await;
    let labels = json["labels"].as_array().unwrap();
    let data = json["data"].as_array().unwrap();
    let colors = json["colors"].as_array().unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(data.len(), 2);
    assert_eq!(colors.len(), 2);
    let pending = labels.iter().position(|l| l == "Pending").unwrap();
    assert_eq!(data[pending], 2);
    assert_eq!(colors[pending], "#ffc107");
}
