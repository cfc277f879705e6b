//! # Middleware Stack
//!
//! Tower middleware for the front door:
//! - [`access_log`]: one log line per response (`method path -> status`).
//! - [`not_allowed`]: rewrite axum's bare 405 into the JSON envelope.
//!
//! The authorization gate lives in [`crate::auth`] since it is a named
//! stage of the request pipeline rather than ambient plumbing.

pub mod access_log;
pub mod not_allowed;
