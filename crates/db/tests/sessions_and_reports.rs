//! Integration tests for sessions, contacts, transactions, and the
//! dashboard aggregates.

use chrono::{Duration, Utc};
use forensic_core::pagination::PageRequest;
use forensic_db::models::contact::CreateContact;
use forensic_db::models::session::CreateSession;
use forensic_db::models::transaction::CreateTransaction;
use forensic_db::models::user::{CreateUser, UpdateUser};
use forensic_db::repositories::{
    ContactRepo, DashboardRepo, SessionRepo, TransactionRepo, UserRepo,
};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            full_name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: "lawyer".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn income(user_id: i64, amount: f64) -> CreateTransaction {
    CreateTransaction {
        case_id: None,
        kind: "income".to_string(),
        concept: "Fee".to_string(),
        amount,
        occurred_at: None,
        user_id,
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_resolves_only_while_valid(pool: PgPool) {
    let user_id = seed_user(&pool, "u@example.com").await;

    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id,
            token_hash: "live".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id,
            token_hash: "stale".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .unwrap();

    let principal = SessionRepo::find_principal(&pool, "live").await.unwrap().unwrap();
    assert_eq!(principal.user_id, user_id);
    assert_eq!(principal.role, "lawyer");
    assert!(SessionRepo::find_principal(&pool, "stale").await.unwrap().is_none());

    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 1);

    // Deactivating the user invalidates the remaining session.
    UserRepo::update(
        &pool,
        user_id,
        &UpdateUser {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(SessionRepo::find_principal(&pool, "live").await.unwrap().is_none());

    assert!(SessionRepo::delete_by_token_hash(&pool, "live").await.unwrap());
    assert!(!SessionRepo::delete_by_token_hash(&pool, "live").await.unwrap());
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_unread_filter_and_stats(pool: PgPool) {
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let contact = ContactRepo::create(
            &pool,
            &CreateContact {
                name: name.to_string(),
                email: "a@b.co".to_string(),
                subject: None,
                message: "hi".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(!contact.is_read);
        ids.push(contact.id);
    }

    assert!(ContactRepo::mark_read(&pool, ids[0]).await.unwrap());
    assert!(!ContactRepo::mark_read(&pool, 9999).await.unwrap());

    let unread = ContactRepo::list(&pool, true, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|c| c.id != ids[0]));
    assert_eq!(ContactRepo::count(&pool, false).await.unwrap(), 3);

    let stats = ContactRepo::stats(&pool, Utc::now() - Duration::days(30))
        .await
        .unwrap();
    assert_eq!(stats.total_messages, 3);
    assert_eq!(stats.unread_messages, 2);
    assert_eq!(stats.recent_messages, 3);
}

// ---------------------------------------------------------------------------
// Transactions and dashboard aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_income_sum_ignores_expenses_and_old_rows(pool: PgPool) {
    let user_id = seed_user(&pool, "u@example.com").await;
    TransactionRepo::create(&pool, &income(user_id, 100.5)).await.unwrap();
    TransactionRepo::create(&pool, &income(user_id, 49.5)).await.unwrap();

    let mut expense = income(user_id, 999.0);
    expense.kind = "expense".to_string();
    TransactionRepo::create(&pool, &expense).await.unwrap();

    let mut old = income(user_id, 1000.0);
    old.occurred_at = Some(Utc::now() - Duration::days(400));
    TransactionRepo::create(&pool, &old).await.unwrap();

    let since = Utc::now() - Duration::days(1);
    let total = TransactionRepo::sum_income_since(&pool, since).await.unwrap();
    assert!((total - 150.0).abs() < f64::EPSILON);

    let series = DashboardRepo::revenue_by_month(&pool, Utc::now() - Duration::days(365))
        .await
        .unwrap();
    let charted: f64 = series.iter().map(|m| m.total).sum();
    assert!((charted - 150.0).abs() < f64::EPSILON);

    assert_eq!(
        TransactionRepo::count(&pool, None, Some("expense")).await.unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_aggregates(pool: PgPool) {
    let since = Utc::now() - Duration::days(365);
    assert!(DashboardRepo::cases_by_month(&pool, since).await.unwrap().is_empty());
    assert!(DashboardRepo::cases_by_status(&pool).await.unwrap().is_empty());
    assert_eq!(
        TransactionRepo::sum_income_since(&pool, since).await.unwrap(),
        0.0
    );
}
