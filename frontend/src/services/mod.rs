//! Browser-side services used by the widget.
//!
//! # Services
//!
//! - [`upload`] - multipart POST of the CSV and response classification
//! - [`download`] - filename resolution and the browser "save as" action

pub mod upload;
pub mod download;

pub use upload::*;
pub use download::*;
