//! Movie-vault credential-shielding proxy library.
//!
//! A small stateless HTTP service that sits between the movie-collection
//! web client and two server-held secrets: the TMDB API key and the fixed
//! access codes gating guest mode and account creation. The handlers exist
//! solely to keep those secrets off the client.

pub mod config;
pub mod http;
pub mod observability;
pub mod tmdb;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use tmdb::TmdbClient;
