//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layering)
//!     → middleware/request_gate.rs (CORS, preflight, method restriction)
//!     → proxy.rs / access_codes.rs (handler logic)
//!     → error.rs (failure → status + JSON envelope)
//!     → Send to client
//! ```

pub mod access_codes;
pub mod error;
pub mod middleware;
pub mod proxy;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
