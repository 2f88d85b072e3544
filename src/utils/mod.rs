//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation and alias validation
//! - [`client_info`] - Visitor IP and user agent extraction
//! - [`request_origin`] - Origin extraction for absolute short URLs

pub mod client_info;
pub mod code_generator;
pub mod request_origin;
