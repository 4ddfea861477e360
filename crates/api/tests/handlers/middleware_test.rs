use chrono::Utc;
use mockall::predicate;
use shopbook_api::middleware::auth;
use shopbook_api::middleware::error_handling::{map_error, AppError};
use shopbook_core::{
    errors::BookingError,
    models::user::{Identity, Role},
};
use shopbook_db::models::DbUser;
use uuid::Uuid;

use crate::test_utils::TestContext;

const TEST_SECRET: &str = "test-secret";

#[tokio::test]
async fn test_error_handling_booking_not_found() {
    let response = map_error(BookingError::BookingNotFound(Uuid::new_v4()));
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_shop_not_found() {
    let response = map_error(BookingError::ShopNotFound(Uuid::new_v4()));
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_unauthorized() {
    let response = map_error(BookingError::Unauthorized {
        user_id: Uuid::new_v4(),
        action: "view",
    });
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_invalid_credentials() {
    let response = map_error(BookingError::InvalidCredentials);
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_quota_exceeded() {
    let response = map_error(BookingError::QuotaExceeded(Uuid::new_v4()));
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    let response = map_error(BookingError::database(
        "Cannot find Booking",
        eyre::eyre!("connection reset"),
    ));
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_body_envelope() {
    let user_id = Uuid::new_v4();
    let response = map_error(BookingError::QuotaExceeded(user_id));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(
        body["message"],
        serde_json::json!(format!(
            "The user with ID {} has already made 3 bookings",
            user_id
        ))
    );
}

#[tokio::test]
async fn test_database_error_body_hides_source() {
    let response = map_error(BookingError::database(
        "Cannot create Booking",
        eyre::eyre!("relation \"bookings\" does not exist"),
    ));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // Only the static message goes to the client
    assert_eq!(body["message"], serde_json::json!("Cannot create Booking"));
}

#[test]
fn test_token_round_trip() {
    let user_id = Uuid::new_v4();
    let token = auth::create_token(user_id, TEST_SECRET, 24).unwrap();

    let claims = auth::decode_token(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.sub, user_id);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_expired_token_rejected() {
    let token = auth::create_token(Uuid::new_v4(), TEST_SECRET, -2).unwrap();
    assert!(auth::decode_token(&token, TEST_SECRET).is_err());
}

#[test]
fn test_token_with_wrong_secret_rejected() {
    let token = auth::create_token(Uuid::new_v4(), TEST_SECRET, 24).unwrap();
    assert!(auth::decode_token(&token, "another-secret").is_err());
}

#[test]
fn test_garbage_token_rejected() {
    assert!(auth::decode_token("not-a-token", TEST_SECRET).is_err());
}

// Mirrors the AuthUser extractor flow against the mock user repository.
async fn authenticate_wrapper(
    ctx: &TestContext,
    token: &str,
    secret: &str,
) -> Result<Identity, AppError> {
    let claims =
        auth::decode_token(token, secret).map_err(|_| BookingError::InvalidCredentials)?;

    let user = ctx
        .user_repo
        .get_user_by_id(claims.sub)
        .await
        .map_err(|_| BookingError::InvalidCredentials)?
        .ok_or(BookingError::InvalidCredentials)?;

    Ok(Identity::new(user.id, Role::from(user.role.as_str())))
}

#[tokio::test]
async fn test_authenticate_reads_role_from_user_row() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.user_repo
        .expect_get_user_by_id()
        .with(predicate::eq(user_id))
        .returning(move |id| {
            Ok(Some(DbUser {
                id,
                name: "Site Admin".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
                created_at: Utc::now(),
            }))
        });

    let token = auth::create_token(user_id, TEST_SECRET, 24).unwrap();
    let identity = authenticate_wrapper(&ctx, &token, TEST_SECRET).await.unwrap();

    assert_eq!(identity.user_id, user_id);
    assert!(identity.is_admin());
}

#[tokio::test]
async fn test_authenticate_unknown_subject_rejected() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    ctx.user_repo
        .expect_get_user_by_id()
        .with(predicate::eq(user_id))
        .returning(|_| Ok(None));

    let token = auth::create_token(user_id, TEST_SECRET, 24).unwrap();
    let result = authenticate_wrapper(&ctx, &token, TEST_SECRET).await;

    let err = result.unwrap_err();
    assert_eq!(err.0.to_string(), "Not authorized to access this route");
}
