//! Application state and factory.
//!
//! `create_app` is generic over the repository and crypto traits so the
//! integration tests can assemble the exact same routing table over
//! in-memory mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ab_core::repositories::{
    BlacklistRepository, InquiryRepository, RefreshTokenRepository, UserRepository,
};
use ab_core::services::auth::AuthService;
use ab_core::services::crypto::PhoneCipher;
use ab_core::services::inquiry::InquiryService;
use ab_core::services::password::PasswordVerifier;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, logout, refresh};
use crate::routes::inquiry::{create_inquiry, get_inquiry, list_inquiries};

/// Application state holding the shared services
pub struct AppState<U, R, B, I, C, P>
where
    U: UserRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
    I: InquiryRepository,
    C: PhoneCipher,
    P: PasswordVerifier,
{
    pub auth_service: Arc<AuthService<U, R, B, C, P>>,
    pub inquiry_service: Arc<InquiryService<I, U>>,
}

/// Create and configure the application with all routes
pub fn create_app<U, R, B, I, C, P>(
    app_state: web::Data<AppState<U, R, B, I, C, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    I: InquiryRepository + 'static,
    C: PhoneCipher + 'static,
    P: PasswordVerifier + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(login::<U, R, B, I, C, P>))
                .route("/logout", web::get().to(logout::<U, R, B, I, C, P>))
                .route("/refresh", web::post().to(refresh::<U, R, B, I, C, P>)),
        )
        // Inquiry board routes
        .service(
            web::scope("/inquiries")
                .route("", web::get().to(list_inquiries::<U, R, B, I, C, P>))
                .route("", web::post().to(create_inquiry::<U, R, B, I, C, P>))
                .route("/{id}", web::get().to(get_inquiry::<U, R, B, I, C, P>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "askboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
