//! # libdash-adapter-http-reqwest
//!
//! HTTP client adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `LibraryApi` port defined in `libdash-app::ports`
//! - Decode the `{success, data, message, errors}` envelope every endpoint
//!   answers with into domain values or a `LibdashError`
//! - Own transport details: base URL, timeouts, user agent
//!
//! ## Dependency rule
//! Depends on `libdash-app` (for port traits) and `libdash-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod client;
mod config;
mod envelope;
mod error;

pub use client::HttpLibraryApi;
pub use config::HttpConfig;
pub use error::HttpError;
