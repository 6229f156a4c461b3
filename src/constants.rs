/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "kavya-client/0.1.0";
/// Path segment appended to the configured backend root
pub const API_PREFIX: &str = "/api";
/// Environment variable holding the backend root address
pub const ENV_API_BASE_URL: &str = "KAVYA_API_BASE_URL";
/// Environment variable holding the origin used to resolve a relative base URL
pub const ENV_APP_ORIGIN: &str = "KAVYA_APP_ORIGIN";
/// Environment variable read by [`crate::application::credentials::EnvToken`] by default
pub const ENV_TOKEN: &str = "KAVYA_TOKEN";
/// Environment variable holding the path of the persistent token file
pub const ENV_TOKEN_FILE: &str = "KAVYA_TOKEN_FILE";
/// Origin used when the base URL is relative and no origin is configured
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost";
/// Default location of the persistent token file
pub const DEFAULT_TOKEN_FILE: &str = ".kavya/token";
/// Multipart field name the backend expects for profile photos
pub const PROFILE_PHOTO_FIELD: &str = "profilePhoto";

/// Fallback error messages, used when the server does not supply one
pub mod messages {
    /// Listing courses failed
    pub const LOAD_COURSES: &str = "Failed to load courses";
    /// Creating a course failed
    pub const CREATE_COURSE: &str = "Failed to create course";
    /// Listing quizzes failed
    pub const LOAD_QUIZZES: &str = "Failed to load quizzes";
    /// Creating a quiz failed
    pub const CREATE_QUIZ: &str = "Failed to create quiz";
    /// Loading a single quiz failed
    pub const LOAD_QUIZ: &str = "Failed to load quiz";
    /// Submitting quiz answers failed
    pub const SUBMIT_QUIZ: &str = "Failed to submit quiz";
    /// Listing events failed
    pub const LOAD_EVENTS: &str = "Failed to load events";
    /// Creating an event failed
    pub const CREATE_EVENT: &str = "Failed to create event";
    /// Loading the profile failed
    pub const LOAD_PROFILE: &str = "Failed to load profile";
    /// Updating the profile failed
    pub const UPDATE_PROFILE: &str = "Failed to update profile";
    /// Uploading the profile photo failed
    pub const UPLOAD_PHOTO: &str = "Failed to upload photo";
    /// Loading the streak failed
    pub const LOAD_STREAK: &str = "Failed to load streak";
    /// Loading the progress overview failed
    pub const LOAD_PROGRESS_OVERVIEW: &str = "Failed to load progress overview";
    /// Loading the recent activity failed
    pub const LOAD_RECENT_ACTIVITY: &str = "Failed to load recent activity";
    /// Certificate download failed; the server body is never consulted
    pub const CERTIFICATE_UNAVAILABLE: &str = "Certificate is not available yet";
    /// Running an AI query failed
    pub const AI_QUERY: &str = "Failed to run AI query";
}
