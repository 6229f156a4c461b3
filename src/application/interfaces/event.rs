use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the event service
#[async_trait]
pub trait EventService: Send + Sync {
    /// Lists events (`GET /events`)
    async fn get_events(&self) -> Result<Value, AppError>;

    /// Creates an event (`POST /events`)
    async fn create_event(&self, payload: &Value) -> Result<Value, AppError>;
}
