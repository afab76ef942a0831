//! Configuration module for wiki access
//!
//! This module provides the `WikiConfig` struct and its builder for
//! configuring the wiki root, page cache and batch concurrency with
//! validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::WikiConfigBuilder;
pub use types::WikiConfig;
