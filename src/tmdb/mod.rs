//! Upstream metadata service client.
//!
//! # Responsibilities
//! - Build upstream URLs from a caller-described endpoint and parameters
//! - Inject the server-held API key and a default locale
//! - Issue the single outbound GET and map the result
//!
//! # Design Decisions
//! - One shared reqwest client; its pool is the only shared resource
//! - No retry, no caching, no per-call timeout (the inbound request
//!   deadline bounds the whole exchange)
//! - Transport errors are stripped of their URL before display, since the
//!   URL carries the API key

pub mod client;

pub use client::{TmdbClient, TmdbError};
