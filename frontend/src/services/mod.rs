//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to the standardization API

pub mod upload;

pub use upload::*;
