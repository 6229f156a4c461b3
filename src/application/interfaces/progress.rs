use crate::error::AppError;
use crate::model::responses::Certificate;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the learning progress service
#[async_trait]
pub trait ProgressService: Send + Sync {
    /// Gets the progress overview (`GET /progress/overview`)
    async fn get_progress_overview(&self) -> Result<Value, AppError>;

    /// Gets recent learning activity (`GET /progress/activity`)
    async fn get_recent_activity(&self) -> Result<Value, AppError>;

    /// Downloads the completion certificate of a course
    /// (`GET /progress/certificates/{course_id}/download`)
    ///
    /// # Returns
    /// * The document bytes exactly as sent by the server
    /// * `AppError::Api` with "Certificate is not available yet" on any non-success status
    async fn download_certificate(&self, course_id: &str) -> Result<Certificate, AppError>;
}
