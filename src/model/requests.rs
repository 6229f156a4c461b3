/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use crate::constants::PROFILE_PHOTO_FIELD;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Body of `POST /quiz/{id}/submit`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SubmitQuizRequest {
    /// Answers in whatever shape the quiz expects
    pub answers: Value,
}

impl SubmitQuizRequest {
    /// Wraps the answers
    pub fn new(answers: Value) -> Self {
        Self { answers }
    }
}

/// Body of `POST /ai/query`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AiQueryRequest {
    /// Course the question is about; omitted from the body when absent
    #[serde(rename = "courseId", skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Free text question
    pub query: String,
}

impl AiQueryRequest {
    /// Question without a course context
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            course_id: None,
            query: query.into(),
        }
    }

    /// Set the course
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }
}

/// Image sent to `POST /users/upload-photo`
#[derive(Clone, PartialEq)]
pub struct ProfilePhoto {
    /// File name reported in the multipart part
    pub file_name: String,
    /// MIME type of the image, when known
    pub content_type: Option<String>,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

impl ProfilePhoto {
    /// Photo from bytes already in memory; the content type is guessed from the name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_image_type(&file_name).map(str::to_string);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Overrides the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reads a photo from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("no usable file name in {}", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        debug!("Read profile photo {} ({} bytes)", file_name, bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    /// Builds the multipart form the backend expects, the image under `profilePhoto`
    pub fn into_form(self) -> Result<Form, AppError> {
        let mut part = Part::bytes(self.bytes).file_name(self.file_name);
        if let Some(content_type) = self.content_type {
            part = part.mime_str(&content_type)?;
        }
        Ok(Form::new().part(PROFILE_PHOTO_FIELD, part))
    }
}

impl fmt::Debug for ProfilePhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilePhoto")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

fn guess_image_type(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
