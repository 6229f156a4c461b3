/******************************************************************************
   Author: Kavya Learning System Team
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::credentials::TokenProvider;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::ApiErrorBody;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Body attached to a request
pub enum Payload<'a, B: Serialize + ?Sized> {
    /// No body
    Empty,
    /// JSON serialized body, sent with `Content-Type: application/json`
    Json(&'a B),
    /// Multipart form; `reqwest` sets the multipart content type and boundary
    Form(Form),
}

impl<B: Serialize + ?Sized> Payload<'_, B> {
    fn is_form(&self) -> bool {
        matches!(self, Payload::Form(_))
    }
}

/// How the message of an `AppError::Api` is chosen on a non-success status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure<'a> {
    /// Use the server's `message` field when present, else the given text
    ServerOr(&'a str),
    /// Always use the given text; the response body is never read as JSON
    Always(&'a str),
}

/// Low level HTTP client for the Kavya REST API
///
/// Builds the URL from the configured base, attaches the bearer token read from
/// the credential provider, sends exactly one request and checks the status
/// before anything is parsed. There are no retries.
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    credentials: Arc<dyn TokenProvider>,
}

impl HttpClient {
    /// Creates a new HTTP client
    ///
    /// # Arguments
    /// * `config` - Base URL and origin settings
    /// * `credentials` - Provider asked for the token on every request
    ///
    /// # Returns
    /// * `Err(AppError::Network)` if the underlying `reqwest` client cannot be built
    pub fn new(config: Arc<Config>, credentials: Arc<dyn TokenProvider>) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(config, credentials, http_client))
    }

    /// Creates a client around an already configured `reqwest::Client`
    pub fn with_http_client(
        config: Arc<Config>,
        credentials: Arc<dyn TokenProvider>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            config,
            credentials,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL a resource path is sent to
    #[must_use]
    pub fn request_url(&self, path: &str) -> String {
        self.config.resolve(&self.config.url_for(path))
    }

    /// Headers for one request: bearer token when present, JSON content type unless `is_form`
    pub fn headers(&self, is_form: bool) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = self.credentials.token().filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        if !is_form {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        headers
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, AppError> {
        let response = self
            .send(Method::GET, path, Payload::<()>::Empty, OnFailure::ServerOr(fallback))
            .await?;
        parse_response(response).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self
            .send(Method::POST, path, Payload::Json(body), OnFailure::ServerOr(fallback))
            .await?;
        parse_response(response).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self
            .send(Method::PUT, path, Payload::Json(body), OnFailure::ServerOr(fallback))
            .await?;
        parse_response(response).await
    }

    /// Makes a POST request with a multipart body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self
            .send(
                Method::POST,
                path,
                Payload::<()>::Form(form),
                OnFailure::ServerOr(fallback),
            )
            .await?;
        parse_response(response).await
    }

    /// Makes a GET request whose failures always report `message`
    ///
    /// The server's error body is ignored.
    pub async fn get_always<T: DeserializeOwned>(
        &self,
        path: &str,
        message: &str,
    ) -> Result<T, AppError> {
        let response = self.get_raw(path, message).await?;
        parse_response(response).await
    }

    /// Makes a GET request and hands back the raw successful response
    ///
    /// On a non-success status the error always carries `message`.
    pub async fn get_raw(&self, path: &str, message: &str) -> Result<Response, AppError> {
        self.send(Method::GET, path, Payload::<()>::Empty, OnFailure::Always(message))
            .await
    }

    /// Sends one request and checks its status
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_, B>,
        on_failure: OnFailure<'_>,
    ) -> Result<Response, AppError> {
        let url = self.request_url(path);
        let headers = self.headers(payload.is_form());
        make_http_request(&self.http_client, method, &url, headers, payload, on_failure).await
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .finish_non_exhaustive()
    }
}

/// Makes a single HTTP request and checks the response status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, ...)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `payload` - Request body
/// * `on_failure` - How the error message is chosen for a non-success status
///
/// # Returns
///
/// * `Ok(Response)` - Response with a success status, body unread
/// * `Err(AppError::InvalidInput)` - The request could not be built (e.g. a malformed header value)
/// * `Err(AppError::Network)` - Transport failure
/// * `Err(AppError::Api)` - Any non-success status
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, String)>,
    payload: Payload<'_, B>,
    on_failure: OnFailure<'_>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);

    for (name, value) in &headers {
        request = request.header(*name, value.as_str());
    }

    request = match payload {
        Payload::Empty => request,
        Payload::Json(body) => request.body(serde_json::to_vec(body)?),
        Payload::Form(form) => request.multipart(form),
    };

    let response = request.send().await.map_err(|e| {
        error!("{} {} failed: {}", method, url, e);
        if e.is_builder() {
            AppError::InvalidInput(format!("could not build request: {e}"))
        } else {
            AppError::from(e)
        }
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let message = match on_failure {
        OnFailure::Always(message) => message.to_string(),
        OnFailure::ServerOr(fallback) => {
            let body = response.bytes().await.unwrap_or_default();
            ApiErrorBody::message_from(&body).unwrap_or_else(|| fallback.to_string())
        }
    };
    error!("{} {} failed with status {}: {}", method, url, status, message);
    Err(AppError::api(status, message))
}

/// Parses a successful response body as JSON
///
/// An empty body parses as JSON `null`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
