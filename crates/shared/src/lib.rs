//! Shared types for ViewMint.
//!
//! This crate provides:
//! - Application error types
//! - Configuration loading

pub mod config;
pub mod error;

pub use config::{AppConfig, ServerConfig};
pub use error::{AppError, AppResult};
