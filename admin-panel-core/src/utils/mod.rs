//! Helpers shared by the composition services

pub mod log_sanitizer;
pub mod minify;
