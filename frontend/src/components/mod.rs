//! UI Components for the CSV upload page.
//!
//! # Layout Components
//! - [`Header`] - Page title bar
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`CsvUploadWidget`] - CSV selection, validation, upload and download

mod header;
mod upload;
mod footer;

pub use header::*;
pub use upload::*;
pub use footer::*;
