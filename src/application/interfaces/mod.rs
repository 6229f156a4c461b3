/// AI assistant interface
pub mod ai;
/// Course service interface
pub mod course;
/// Event service interface
pub mod event;
/// Profile service interface
pub mod profile;
/// Progress service interface
pub mod progress;
/// Quiz service interface
pub mod quiz;
