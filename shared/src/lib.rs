//! # AskBoard Shared
//!
//! Configuration types shared across the AskBoard backend crates.
//! Everything here is loaded once at process startup and injected into the
//! services that need it; nothing in this crate performs I/O at runtime.

pub mod config;

pub use config::AppConfig;
