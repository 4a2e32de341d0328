//! Core use-case services.
//!
//! # Responsibility
//! - Run store operations with metadata-only logging.
//! - Execute state commands and translate outcomes into state messages.

pub mod story_service;
