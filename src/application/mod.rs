/// High level client implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Credential providers supplying the bearer token
pub mod credentials;
/// Service interfaces, one per API resource group
pub mod interfaces;
