// Evaluations Control Plane Library
// Decision: Shared library for binaries (API server, OpenAPI export) and tests

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Router assembly
pub mod app;
pub use app::build_app;

// Environment configuration
pub mod config;
pub use config::ServerConfig;

// Services layer
pub mod services;
pub use services::{FormService, StatusService};

// Storage layer
pub mod storage;

// OpenAPI spec generation
pub mod openapi;
