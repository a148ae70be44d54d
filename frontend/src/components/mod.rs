//! UI Components for the GWAS header standardizer.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadZone`] - File selection with drag & drop
//! - [`LoadingNotice`] / [`ErrorBanner`] - Request status
//! - [`FileResultCard`] - Preview and mapping tables for one file

mod hero;
mod result_card;
mod status;
mod upload;

pub use hero::*;
pub use result_card::*;
pub use status::*;
pub use upload::*;
