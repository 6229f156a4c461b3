use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the AI study assistant
#[async_trait]
pub trait AiService: Send + Sync {
    /// Asks the assistant a question (`POST /ai/query`)
    ///
    /// # Arguments
    /// * `course_id` - Course giving context to the question, omitted from the body when `None`
    /// * `query` - The question
    async fn ai_query(&self, course_id: Option<&str>, query: &str) -> Result<Value, AppError>;
}
