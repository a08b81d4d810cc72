/// Token holder and unauthorized hook
pub mod auth;
/// Client type all services are implemented on
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one trait per resource group
pub mod interfaces;
/// Service implementations on `Client`
pub mod services;
