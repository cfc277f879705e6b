//! # gatehouse-auth-client — Identity Provider Client
//!
//! Typed HTTP client for the remote identity provider that validates bearer
//! tokens. The provider owns all trust decisions: this crate forwards the
//! raw token, interprets the provider's JSON verdict, and derives an
//! [`Identity`] on success.
//!
//! ## Contract
//!
//! `GET <base_url>/api/V2/token` with the token in the `Authorization`
//! header. The response body is JSON, either:
//!
//! - `{ "error": { "message": "..." } }` — the token was rejected, or
//! - `{ "user": "...", ... }` — the token is valid.
//!
//! The body is interpreted regardless of the HTTP status code; the `error`
//! field is the authoritative rejection signal.
//!
//! ## Semantics
//!
//! Exactly one outbound call per verification. No caching, no retry, no
//! deduplication of concurrent checks. Each request carries a bounded
//! timeout so a stalled provider surfaces as [`AuthError::Timeout`] instead
//! of hanging the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;

pub use client::{HttpTokenVerifier, TokenVerifier};
pub use config::{ConfigError, ProviderConfig};
pub use error::AuthError;
pub use identity::Identity;
