/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::credentials::{FileTokenStore, TokenProvider};
use crate::application::interfaces::ai::AiService;
use crate::application::interfaces::course::CourseService;
use crate::application::interfaces::event::EventService;
use crate::application::interfaces::profile::ProfileService;
use crate::application::interfaces::progress::ProgressService;
use crate::application::interfaces::quiz::QuizService;
use crate::constants::messages;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{AiQueryRequest, ProfilePhoto, SubmitQuizRequest};
use crate::model::responses::{Certificate, file_name_from_disposition};
use async_trait::async_trait;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderName};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Kavya learning-system API
///
/// Implements every service interface. Each call maps to exactly one HTTP
/// request; the token is asked from the credential provider on every call.
/// The client is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client with an explicit configuration and credential provider
    pub fn new(config: Config, credentials: Arc<dyn TokenProvider>) -> Result<Self, AppError> {
        let http_client = HttpClient::new(Arc::new(config), credentials)?;
        Ok(Self::from_http_client(http_client))
    }

    /// Creates a client from the process-wide configuration, reading the token
    /// from the persistent token file it names
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(Config::global().clone())
    }

    /// Creates a client whose token is read from `config.token_file` on every request
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let credentials = Arc::new(FileTokenStore::new(config.token_file.clone()));
        Self::new(config, credentials)
    }

    /// Wraps an existing HTTP client
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// The underlying HTTP client, for calls that want typed responses
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

/// Checks an identifier before it is spliced into a path or query string
fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    if value.contains(['/', '?', '#', '&']) {
        return Err(AppError::InvalidInput(format!(
            "{name} contains reserved characters: {value}"
        )));
    }
    Ok(value)
}

#[async_trait]
impl CourseService for Client {
    async fn get_courses(&self) -> Result<Value, AppError> {
        info!("Getting courses");
        let courses: Value = self
            .http_client
            .get("/courses", messages::LOAD_COURSES)
            .await?;
        debug!("Courses obtained");
        Ok(courses)
    }

    async fn create_course(&self, payload: &Value) -> Result<Value, AppError> {
        info!("Creating course");
        self.http_client
            .post("/courses", payload, messages::CREATE_COURSE)
            .await
    }
}

#[async_trait]
impl QuizService for Client {
    async fn get_quizzes(&self, course_id: Option<&str>) -> Result<Value, AppError> {
        let path = match course_id.filter(|id| !id.is_empty()) {
            Some(id) => format!("/quiz?courseId={}", path_segment("course id", id)?),
            None => "/quiz".to_string(),
        };
        info!("Getting quizzes");
        self.http_client.get(&path, messages::LOAD_QUIZZES).await
    }

    async fn create_quiz(&self, payload: &Value) -> Result<Value, AppError> {
        info!("Creating quiz");
        self.http_client
            .post("/quiz", payload, messages::CREATE_QUIZ)
            .await
    }

    async fn get_quiz(&self, id: &str) -> Result<Value, AppError> {
        let path = format!("/quiz/{}", path_segment("quiz id", id)?);
        info!("Getting quiz {}", id);
        self.http_client.get(&path, messages::LOAD_QUIZ).await
    }

    async fn submit_quiz(&self, id: &str, answers: &Value) -> Result<Value, AppError> {
        let path = format!("/quiz/{}/submit", path_segment("quiz id", id)?);
        info!("Submitting answers for quiz {}", id);
        let body = SubmitQuizRequest::new(answers.clone());
        self.http_client
            .post(&path, &body, messages::SUBMIT_QUIZ)
            .await
    }
}

#[async_trait]
impl EventService for Client {
    async fn get_events(&self) -> Result<Value, AppError> {
        info!("Getting events");
        self.http_client.get("/events", messages::LOAD_EVENTS).await
    }

    async fn create_event(&self, payload: &Value) -> Result<Value, AppError> {
        info!("Creating event");
        self.http_client
            .post("/events", payload, messages::CREATE_EVENT)
            .await
    }
}

#[async_trait]
impl ProfileService for Client {
    async fn get_profile(&self) -> Result<Value, AppError> {
        info!("Getting profile");
        self.http_client
            .get("/users/profile", messages::LOAD_PROFILE)
            .await
    }

    async fn update_profile(&self, payload: &Value) -> Result<Value, AppError> {
        info!("Updating profile");
        let profile: Value = self
            .http_client
            .put("/users/profile", payload, messages::UPDATE_PROFILE)
            .await?;
        debug!("Profile updated");
        Ok(profile)
    }

    async fn upload_profile_photo(&self, photo: ProfilePhoto) -> Result<Value, AppError> {
        info!(
            "Uploading profile photo {} ({} bytes)",
            photo.file_name,
            photo.bytes.len()
        );
        let form = photo.into_form()?;
        self.http_client
            .post_multipart("/users/upload-photo", form, messages::UPLOAD_PHOTO)
            .await
    }

    async fn get_streak(&self) -> Result<Value, AppError> {
        info!("Getting streak");
        self.http_client
            .get_always("/users/streak", messages::LOAD_STREAK)
            .await
    }
}

#[async_trait]
impl ProgressService for Client {
    async fn get_progress_overview(&self) -> Result<Value, AppError> {
        info!("Getting progress overview");
        self.http_client
            .get_always("/progress/overview", messages::LOAD_PROGRESS_OVERVIEW)
            .await
    }

    async fn get_recent_activity(&self) -> Result<Value, AppError> {
        info!("Getting recent activity");
        self.http_client
            .get_always("/progress/activity", messages::LOAD_RECENT_ACTIVITY)
            .await
    }

    async fn download_certificate(&self, course_id: &str) -> Result<Certificate, AppError> {
        let course_id = path_segment("course id", course_id)?;
        let path = format!("/progress/certificates/{course_id}/download");
        info!("Downloading certificate for course {}", course_id);

        let response = self
            .http_client
            .get_raw(&path, messages::CERTIFICATE_UNAVAILABLE)
            .await?;

        let (content_type, file_name) = {
            let headers = response.headers();
            let header = |name: HeaderName| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            let file_name = header(CONTENT_DISPOSITION)
                .as_deref()
                .and_then(file_name_from_disposition);
            (header(CONTENT_TYPE), file_name)
        };
        let bytes = response.bytes().await?.to_vec();

        debug!("Certificate downloaded: {} bytes", bytes.len());
        Ok(Certificate {
            course_id: course_id.to_string(),
            content_type,
            file_name,
            bytes,
        })
    }
}

#[async_trait]
impl AiService for Client {
    async fn ai_query(&self, course_id: Option<&str>, query: &str) -> Result<Value, AppError> {
        let mut body = AiQueryRequest::new(query);
        if let Some(id) = course_id {
            body = body.with_course(id);
        }
        info!("Sending AI query");
        self.http_client
            .post("/ai/query", &body, messages::AI_QUERY)
            .await
    }
}
