/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Error body the backend sends with non-success statuses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiErrorBody {
    /// Human readable reason
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts a non-blank `message` from a raw error body
    ///
    /// Anything that is not a JSON object with a string `message` yields `None`.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Certificate document downloaded for a completed course
#[derive(Clone, PartialEq)]
pub struct Certificate {
    /// Course the certificate belongs to
    pub course_id: String,
    /// `Content-Type` reported by the server
    pub content_type: Option<String>,
    /// File name from `Content-Disposition`, when the server sends one
    pub file_name: Option<String>,
    /// Document bytes exactly as received
    pub bytes: Vec<u8>,
}

impl Certificate {
    /// Size of the document in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for an empty document
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the document to `path`
    pub async fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, &self.bytes).await?;
        info!(
            "Certificate for course {} saved to {} ({} bytes)",
            self.course_id,
            path.display(),
            self.bytes.len()
        );
        Ok(())
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("course_id", &self.course_id)
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Pulls `filename` out of a `Content-Disposition` header value
pub fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|param| param.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
