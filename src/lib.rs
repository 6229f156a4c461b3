/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/

//! # Kavya Client
//!
//! Async client for the Kavya learning-system REST API: courses, quizzes,
//! events, the user profile, learning progress and the AI study assistant.
//!
//! Every operation issues exactly one HTTP request against the configured base
//! URL, attaches `Authorization: Bearer <token>` when the credential provider
//! has a token, checks the response status and returns the parsed JSON body
//! (or, for certificates, the raw bytes).
//!
//! ## Configuration
//!
//! | Variable | Meaning |
//! |---|---|
//! | `KAVYA_API_BASE_URL` | backend root, `/api` is appended; unset means the relative `/api` |
//! | `KAVYA_APP_ORIGIN` | origin a relative base URL is resolved against (`http://localhost`) |
//! | `KAVYA_TOKEN_FILE` | persistent token file used by [`Client::from_env`](application::client::Client::from_env) |
//! | `LOGLEVEL` | tracing level for [`setup_logger`](utils::logger::setup_logger) |
//!
//! ## Example
//!
//! ```rust,no_run
//! use kavya_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(
//!         Config::with_base_url("https://kavya.example.com"),
//!         Arc::new(StaticToken::new("my-token")),
//!     )?;
//!
//!     let courses = client.get_courses().await?;
//!     info!("Courses: {}", courses);
//!
//!     let quizzes = client.get_quizzes(Some("42")).await?;
//!     info!("Quizzes for course 42: {}", quizzes);
//!     Ok(())
//! }
//! ```

/// Client, configuration, credentials and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request, response and HTTP transport models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
