//! Widget-local state and its transitions.
//!
//! The component keeps one [`WidgetState`] in a signal and only changes it
//! through these methods, which keeps the rule "upload is enabled iff a
//! file is selected and nothing is in flight" in one place.

use crate::config::UploadConfig;
use crate::types::{CandidateFile, SelectedFile, UploadError, UploadResult, UploadState};
use crate::validation::validate_file;

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<F = web_sys::File> {
    selected: Option<SelectedFile<F>>,
    upload: UploadState,
    error: Option<UploadError>,
}

impl<F> Default for WidgetState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            upload: UploadState::Idle,
            error: None,
        }
    }
}

impl<F> WidgetState<F> {
    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn upload_state(&self) -> UploadState {
        self.upload
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// Text to show under the upload button, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_uploading()
    }

    /// Upload action is enabled.
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    /// Drop the selected file and any message. Touches nothing remote.
    pub fn remove(&mut self) {
        self.selected = None;
        self.error = None;
    }

    /// Leave the in-flight state with the transfer's outcome.
    pub fn finish_upload(&mut self, outcome: UploadResult<()>) {
        self.upload = UploadState::Idle;
        self.error = outcome.err();
    }
}

impl<F: CandidateFile> WidgetState<F> {
    /// Validate `file` and keep it on success.
    ///
    /// A rejected file also clears any previous selection.
    pub fn select(&mut self, file: F, config: &UploadConfig) -> UploadResult<()> {
        match validate_file(&file, config) {
            Ok(()) => {
                self.selected = Some(SelectedFile::new(file));
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.selected = None;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

impl<F: Clone> WidgetState<F> {
    /// Enter [`UploadState::Uploading`] and hand out the file to send.
    ///
    /// Returns `None`, leaving the state untouched, when the upload action
    /// is disabled.
    pub fn begin_upload(&mut self) -> Option<F> {
        if !self.can_upload() {
            return None;
        }
        let handle = self.selected.as_ref().map(|file| file.handle.clone())?;
        self.upload = UploadState::Uploading;
        Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use crate::validation::tests::FakeFile;

    fn state_with_file() -> WidgetState<FakeFile> {
        let mut state = WidgetState::default();
        state
            .select(FakeFile::csv(10), &UploadConfig::default())
            .unwrap();
        state
    }

    #[test]
    fn starts_empty_and_disabled() {
        let state = WidgetState::<FakeFile>::default();
        assert!(state.selected().is_none());
        assert_eq!(state.upload_state(), UploadState::Idle);
        assert!(state.error().is_none());
        assert!(!state.can_upload());
    }

    #[test]
    fn accepting_a_file_clears_prior_error() {
        let config = UploadConfig::default();
        let mut state = WidgetState::default();
        let bad = FakeFile { name: "notes.txt", media_type: "text/plain", size: 3 };
        assert_eq!(state.select(bad, &config), Err(UploadError::InvalidType));
        assert_eq!(state.error_message().as_deref(), Some("Please upload a CSV file"));

        assert!(state.select(FakeFile::csv(MAX_FILE_SIZE), &config).is_ok());
        assert!(state.error().is_none());
        let selected = state.selected().unwrap();
        assert_eq!(selected.name, "rows.csv");
        assert_eq!(selected.size, MAX_FILE_SIZE);
        assert_eq!(selected.media_type, "text/csv");
    }

    #[test]
    fn rejected_file_replaces_previous_selection() {
        let mut state = state_with_file();
        let err = state
            .select(FakeFile::csv(MAX_FILE_SIZE + 1), &UploadConfig::default())
            .unwrap_err();
        assert_eq!(err, UploadError::TooLarge { max_mb: 5 });
        assert!(state.selected().is_none());
        assert_eq!(state.error(), Some(&err));
        assert!(!state.can_upload());
    }

    #[test]
    fn new_valid_file_replaces_old_one() {
        let mut state = state_with_file();
        let other = FakeFile { name: "other.csv", media_type: "text/csv", size: 99 };
        state.select(other, &UploadConfig::default()).unwrap();
        assert_eq!(state.selected().unwrap().name, "other.csv");
    }

    #[test]
    fn remove_clears_file_and_error() {
        let mut state = state_with_file();
        state.error = Some(UploadError::NoResponse { reason: "offline".into() });
        state.remove();
        assert!(state.selected().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.upload_state(), UploadState::Idle);
    }

    #[test]
    fn only_one_transfer_in_flight() {
        let mut state = state_with_file();
        assert!(state.can_upload());

        let handle = state.begin_upload().unwrap();
        assert_eq!(handle.name, "rows.csv");
        assert!(state.is_uploading());
        assert!(!state.can_upload());

        assert_eq!(state.begin_upload(), None);
        assert!(state.is_uploading());
    }

    #[test]
    fn begin_upload_without_file_is_noop() {
        let mut state = WidgetState::<FakeFile>::default();
        assert_eq!(state.begin_upload(), None);
        assert_eq!(state.upload_state(), UploadState::Idle);
    }

    #[test]
    fn failure_returns_to_idle_with_message() {
        let mut state = state_with_file();
        state.begin_upload().unwrap();
        state.finish_upload(Err(UploadError::NoResponse { reason: "timeout".into() }));

        assert_eq!(state.upload_state(), UploadState::Idle);
        assert_eq!(
            state.error_message().as_deref(),
            Some("No response received from the server. Please try again.")
        );
        // The file stays selected so the user can retry.
        assert!(state.can_upload());
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = state_with_file();
        state.begin_upload().unwrap();
        state.finish_upload(Err(UploadError::ServerRejected {
            status: 400,
            message: "bad rows".into(),
        }));
        assert_eq!(state.error_message().as_deref(), Some("bad rows"));

        state.begin_upload().unwrap();
        state.finish_upload(Ok(()));
        assert!(state.error().is_none());
        assert_eq!(state.upload_state(), UploadState::Idle);
    }

    #[test]
    fn enabled_iff_selected_and_idle() {
        let config = UploadConfig::default();
        let candidates = [
            FakeFile::csv(1),
            FakeFile::csv(MAX_FILE_SIZE + 1),
            FakeFile { name: "a.json", media_type: "application/json", size: 1 },
        ];
        for file in candidates {
            let mut state = WidgetState::default();
            let _ = state.select(file, &config);
            assert_eq!(state.can_upload(), state.selected().is_some() && !state.is_uploading());
            if state.begin_upload().is_some() {
                assert!(!state.can_upload());
            }
        }
    }
}
