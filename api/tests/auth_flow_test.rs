//! Integration tests for the authentication endpoints, driven over the
//! real routing table with in-memory stores.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use uuid::Uuid;

use ab_api::app::{create_app, AppState};
use ab_api::handlers::error::{LOGIN_FAILED, LOGOUT_SUCCESS};
use ab_core::domain::entities::user::User;
use ab_core::repositories::{
    MockBlacklistRepository, MockInquiryRepository, MockRefreshTokenRepository,
    MockUserRepository,
};
use ab_core::services::auth::AuthService;
use ab_core::services::crypto::{AesPhoneCipher, PhoneCipher};
use ab_core::services::inquiry::InquiryService;
use ab_core::services::password::BcryptVerifier;
use ab_core::services::token::{TokenCodec, TokenCodecConfig};

const PHONE: &str = "010-1111-2222";
const PASSWORD: &str = "correct";
const SECRET: &str = "api-test-secret";

type MockState = AppState<
    MockUserRepository,
    MockRefreshTokenRepository,
    MockBlacklistRepository,
    MockInquiryRepository,
    AesPhoneCipher,
    BcryptVerifier,
>;

fn codec_config() -> TokenCodecConfig {
    TokenCodecConfig {
        secret: SECRET.to_string(),
        access_token_expiry_minutes: 30,
        refresh_token_expiry_days: 14,
        issuer: "askboard".to_string(),
    }
}

/// Application state over fresh mocks with one registered user.
async fn state_with_user() -> (web::Data<MockState>, Uuid) {
    let users = Arc::new(MockUserRepository::new());
    let refresh_tokens = Arc::new(MockRefreshTokenRepository::new());
    let blacklist = Arc::new(MockBlacklistRepository::new());
    let inquiries = Arc::new(MockInquiryRepository::new());
    let cipher = Arc::new(AesPhoneCipher::new([3u8; 32]));
    let codec = Arc::new(TokenCodec::new(codec_config()));

    let hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let user = User::new(cipher.encrypt(PHONE).unwrap(), hash);
    let user_id = user.id;
    users.insert(user).await;

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        refresh_tokens,
        blacklist,
        cipher,
        Arc::new(BcryptVerifier::new()),
        codec,
    ));
    let inquiry_service = Arc::new(InquiryService::new(inquiries, users));

    (
        web::Data::new(AppState {
            auth_service,
            inquiry_service,
        }),
        user_id,
    )
}

fn login_request(phone: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "phoneNum": phone, "password": password }))
        .to_request()
}

#[actix_rt::test]
async fn test_login_returns_bearer_token_pair() {
    let (state, user_id) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request(PHONE, PASSWORD)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["grantType"], "Bearer");

    let access = body["accessToken"].as_str().unwrap();
    let refresh = body["refreshToken"].as_str().unwrap();
    assert!(!access.is_empty());
    assert!(!refresh.is_empty());

    // The access token decodes back to the registered user
    let codec = TokenCodec::new(codec_config());
    assert_eq!(codec.subject(access).unwrap(), user_id.to_string());
}

#[actix_rt::test]
async fn test_login_failures_share_one_generic_body() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let wrong_password = test::call_service(&app, login_request(PHONE, "wrong")).await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let body_a = test::read_body(wrong_password).await;
    assert_eq!(body_a, LOGIN_FAILED.as_bytes());

    let unknown_phone = test::call_service(&app, login_request("010-9999-0000", PASSWORD)).await;
    assert_eq!(unknown_phone.status(), StatusCode::UNAUTHORIZED);
    let body_b = test::read_body(unknown_phone).await;
    assert_eq!(body_a, body_b);
}

#[actix_rt::test]
async fn test_logout_then_refresh_is_rejected() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request(PHONE, PASSWORD)).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access = body["accessToken"].as_str().unwrap().to_string();
    let refresh = body["refreshToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!(
            "/auth/logout?accessToken={}&refreshToken={}",
            access, refresh
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, LOGOUT_SUCCESS.as_bytes());

    // The blacklisted refresh token can no longer mint access tokens
    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .insert_header(("Authorization", format!("Bearer {}", refresh)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_double_logout_succeeds() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request(PHONE, PASSWORD)).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let uri = format!(
        "/auth/logout?accessToken={}&refreshToken={}",
        body["accessToken"].as_str().unwrap(),
        body["refreshToken"].as_str().unwrap()
    );

    for _ in 0..2 {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_rt::test]
async fn test_logout_with_garbage_tokens_is_bad_request() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/auth/logout?accessToken=garbage&refreshToken=garbage")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_refresh_returns_new_access_token_same_refresh_token() {
    let (state, user_id) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, login_request(PHONE, PASSWORD)).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let refresh = body["refreshToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .insert_header(("Authorization", format!("Bearer {}", refresh)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let refreshed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(refreshed["grantType"], "Bearer");
    assert_eq!(refreshed["refreshToken"], refresh.as_str());

    let codec = TokenCodec::new(codec_config());
    let new_access = refreshed["accessToken"].as_str().unwrap();
    assert_eq!(codec.subject(new_access).unwrap(), user_id.to_string());
}

#[actix_rt::test]
async fn test_refresh_without_authorization_header_is_rejected() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post().uri("/auth/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_health_check() {
    let (state, _) = state_with_user().await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
