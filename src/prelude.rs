/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/

//! # Kavya Client Prelude
//!
//! Brings the client, its service traits, the configuration and the error type
//! into scope with a single import.
//!
//! ```rust
//! use kavya_client::prelude::*;
//!
//! let config = Config::with_base_url("https://kavya.example.com");
//! let client = Client::new(config, Arc::new(StaticToken::none())).unwrap();
//! assert_eq!(
//!     client.http_client().request_url("/courses"),
//!     "https://kavya.example.com/api/courses"
//! );
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the API client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, KavyaResult};

// ============================================================================
// CREDENTIALS
// ============================================================================

/// Token providers
pub use crate::application::credentials::{
    EnvToken, FileTokenStore, MemoryTokenStore, StaticToken, TokenProvider,
};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    ai::AiService, course::CourseService, event::EventService, profile::ProfileService,
    progress::ProgressService, quiz::QuizService,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// HTTP client
pub use crate::model::http::{HttpClient, OnFailure, Payload};

/// Request and response models
pub use crate::model::requests::{AiQueryRequest, ProfilePhoto, SubmitQuizRequest};
pub use crate::model::responses::{ApiErrorBody, Certificate};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::{Method, StatusCode};
