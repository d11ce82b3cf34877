//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides for secrets)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; rotation of a secret requires restart
//! - All fields have defaults so a bare `movievault-proxy` run works
//! - The API key and access codes may come from the environment so the
//!   config file can be committed without them

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AccessConfig;
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::UpstreamConfig;
