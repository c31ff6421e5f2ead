//! Security subsystem.
//!
//! # Responsibilities
//! - Hold secrets without leaking them into logs (secret.rs)
//! - Response hardening headers (headers.rs)

pub mod headers;
pub mod secret;

pub use secret::SharedSecret;
