//! Custom extractors for Axum handlers.
//!
//! Both reject with the standard error body instead of axum's plain-text
//! rejections.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
