use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the course service
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Lists the courses visible to the current user (`GET /courses`)
    async fn get_courses(&self) -> Result<Value, AppError>;

    /// Creates a course (`POST /courses`)
    ///
    /// # Arguments
    /// * `payload` - Course document, sent as is
    ///
    /// # Returns
    /// * The created course as returned by the server
    async fn create_course(&self, payload: &Value) -> Result<Value, AppError>;
}
