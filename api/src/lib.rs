//! HTTP API layer for the AskBoard backend.
//!
//! Exposes the application factory and route handlers so integration
//! tests can assemble the app against mock repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
