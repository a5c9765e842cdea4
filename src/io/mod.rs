//! Input/output: CLI, image discovery, export, configuration, errors and logging

/// Command-line interface and run orchestration
pub mod cli;
/// Source image discovery
pub mod collector;
/// Defaults and validated runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Collage export
pub mod image;
/// Render progress display
pub mod progress;
/// Logging of recorded warnings
pub mod report;
