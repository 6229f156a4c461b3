use crate::error::AppError;
use crate::model::requests::ProfilePhoto;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user profile service
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Gets the current user's profile (`GET /users/profile`)
    async fn get_profile(&self) -> Result<Value, AppError>;

    /// Updates the current user's profile (`PUT /users/profile`)
    ///
    /// A rejected update fails with the server's message, or
    /// "Failed to update profile" when there is none.
    async fn update_profile(&self, payload: &Value) -> Result<Value, AppError>;

    /// Uploads a new profile photo (`POST /users/upload-photo`)
    ///
    /// The image travels as multipart form data under the `profilePhoto` field,
    /// without a JSON content type.
    async fn upload_profile_photo(&self, photo: ProfilePhoto) -> Result<Value, AppError>;

    /// Gets the current user's activity streak (`GET /users/streak`)
    async fn get_streak(&self) -> Result<Value, AppError>;
}
