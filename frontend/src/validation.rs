//! File checks run before a file may be uploaded.
//!
//! Type is checked before size, so a non-CSV file is always reported as
//! such whatever its size.

use crate::config::UploadConfig;
use crate::types::{CandidateFile, UploadError, UploadResult};

/// Accept or reject `file` against the configured type and size limits.
pub fn validate_file(file: &impl CandidateFile, config: &UploadConfig) -> UploadResult<()> {
    if file.media_type() != config.accepted_mime {
        return Err(UploadError::InvalidType);
    }
    if file.size() > config.max_file_size {
        return Err(UploadError::TooLarge {
            max_mb: config.max_file_size_mb(),
        });
    }
    Ok(())
}
