use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the quiz service
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Lists quizzes, optionally restricted to one course
    ///
    /// `None` or an empty id requests `/quiz`, `Some("42")` requests `/quiz?courseId=42`.
    async fn get_quizzes(&self, course_id: Option<&str>) -> Result<Value, AppError>;

    /// Creates a quiz (`POST /quiz`)
    async fn create_quiz(&self, payload: &Value) -> Result<Value, AppError>;

    /// Gets one quiz (`GET /quiz/{id}`)
    async fn get_quiz(&self, id: &str) -> Result<Value, AppError>;

    /// Submits answers for a quiz (`POST /quiz/{id}/submit`)
    ///
    /// # Arguments
    /// * `id` - Quiz identifier
    /// * `answers` - Sent as `{"answers": answers}`
    ///
    /// # Returns
    /// * The grading result as returned by the server
    async fn submit_quiz(&self, id: &str, answers: &Value) -> Result<Value, AppError>;
}
