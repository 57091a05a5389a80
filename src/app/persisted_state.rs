// SPDX-License-Identifier: MPL-2.0
//! Session state kept between runs in `state.cbor`.
//!
//! Unlike `settings.toml`, nothing here is user-editable: it only remembers
//! where the user last opened images from and saved montages to, so the file
//! dialogs start in the same place next time.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Starting directory of the save dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Starting directory of the open dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from `base_dir`, or from the resolved data directory.
    ///
    /// Never fails: problems yield the default state plus the i18n key of a
    /// warning to show.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot open state file");
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot parse state file");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Writes state to `base_dir`, or to the resolved data directory,
    /// returning a warning key on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %err, "cannot create data directory");
                return Some("notification-state-write-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });
        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot write state file");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    /// Remembers the directory containing `file_path` for the save dialog.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the directory containing `file_path` for the open dialog.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_last_save_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(Path::new("/home/user/montages/montage.png"));
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/montages"))
        );
    }

    #[test]
    fn set_last_open_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");
        let original = AppState {
            last_save_directory: Some(PathBuf::from("/test/save")),
            last_open_directory: Some(PathBuf::from("/test/open")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
