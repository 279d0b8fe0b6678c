//! JSON persistence for the settings document.
//!
//! The document lives at a fixed, configuration-external location:
//! `<data dir>/system_settings.json`, where the data directory is `./data`
//! relative to the working directory in a standard deployment (tests inject
//! their own directory).
//!
//! # Atomic replace
//!
//! A crash in the middle of an in-place overwrite would leave a truncated
//! document and take the whole platform configuration with it.  Writes
//! therefore go to a sibling temporary file which is renamed over the
//! target; on POSIX file systems the rename is atomic, so readers observe
//! either the old complete document or the new complete document, never a
//! partial one.
//!
//! # Permissions
//!
//! On Unix the data directory is created `0755` and the document written
//! `0644` — owner read/write, world read.  The document contains the SMTP
//! password in plaintext (a documented property of this layer), so stricter
//! deployments may wish to tighten the parent directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::settings::SystemSettings;

/// Directory holding all platform state, relative to the working directory.
pub const DATA_DIR: &str = "data";

/// File name of the settings document inside the data directory.
pub const SETTINGS_FILE_NAME: &str = "system_settings.json";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsFileError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The on-disk document is not a valid encoding of the schema.
    #[error("failed to parse settings JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The record could not be encoded.  Should not occur for a
    /// fully-populated record; kept for a complete taxonomy.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Resolves the full path of the settings document under `data_dir`.
pub fn settings_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE_NAME)
}

/// Reads the settings document at `path`.
///
/// Returns `Ok(None)` when the file does not exist — the caller treats that
/// as first run.  "File exists but cannot be read" and "file exists but does
/// not parse" are genuine errors and are NOT collapsed into the first-run
/// case, so a permissions problem can never silently reset a deployment to
/// defaults.
///
/// # Errors
///
/// [`SettingsFileError::Io`] for file-system errors other than "not found",
/// [`SettingsFileError::Parse`] if the JSON is malformed or mistyped.
pub fn read_settings(path: &Path) -> Result<Option<SystemSettings>, SettingsFileError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let settings =
                serde_json::from_str(&content).map_err(SettingsFileError::Parse)?;
            debug!(path = %path.display(), "settings document read");
            Ok(Some(settings))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SettingsFileError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `settings` to `path`, replacing any existing document in full.
///
/// Creates the parent directory (and any missing ancestors) first, then
/// performs the temp-file-plus-rename dance described in the module docs.
/// The document is pretty-printed with two-space indentation and ends with
/// a newline.
///
/// # Errors
///
/// [`SettingsFileError::Io`] if the directory cannot be created or the file
/// cannot be written, [`SettingsFileError::Serialize`] if encoding fails.
pub fn write_settings(path: &Path, settings: &SystemSettings) -> Result<(), SettingsFileError> {
    // Only set the directory mode when we actually create it, so an
    // operator-tightened mode survives subsequent saves.
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| SettingsFileError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            set_unix_mode(dir, 0o755)?;
        }
    }

    let mut content =
        serde_json::to_string_pretty(settings).map_err(SettingsFileError::Serialize)?;
    content.push('\n');

    // Sibling temp file in the same directory, so the final rename never
    // crosses a file-system boundary.
    let tmp_path = {
        let mut os = path.as_os_str().to_owned();
        os.push(".tmp");
        PathBuf::from(os)
    };

    let result = std::fs::write(&tmp_path, content)
        .map_err(|source| SettingsFileError::Io {
            path: tmp_path.clone(),
            source,
        })
        .and_then(|()| set_unix_mode(&tmp_path, 0o644))
        .and_then(|()| {
            std::fs::rename(&tmp_path, path).map_err(|source| SettingsFileError::Io {
                path: path.to_path_buf(),
                source,
            })
        });

    if result.is_err() {
        // Best-effort cleanup; the original document is still intact.
        let _ = std::fs::remove_file(&tmp_path);
    } else {
        debug!(path = %path.display(), "settings document written");
    }
    result
}

/// Applies `mode` to `path` on Unix; no-op elsewhere.
fn set_unix_mode(path: &Path, mode: u32) -> Result<(), SettingsFileError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).map_err(
            |source| SettingsFileError::Io {
                path: path.to_path_buf(),
                source,
            },
        )?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Fresh directory under the OS temp dir; unique per test so tests can
    /// run concurrently without sharing any state.
    fn temp_data_dir() -> PathBuf {
        std::env::temp_dir().join(format!("ctf_settings_test_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_read_settings_returns_none_when_file_absent() {
        let dir = temp_data_dir();
        let path = settings_file_path(&dir);

        let result = read_settings(&path).expect("absent file is not an error");

        assert!(result.is_none());
    }

    #[test]
    fn test_write_then_read_round_trips_the_record() {
        let dir = temp_data_dir();
        let path = settings_file_path(&dir);
        let mut settings = SystemSettings::default();
        settings.system_name = "Storage Round Trip".to_string();
        settings.smtp_port = 465;

        write_settings(&path, &settings).expect("write");
        let restored = read_settings(&path).expect("read").expect("file exists");

        assert_eq!(restored, settings);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_settings_creates_missing_parent_directories() {
        let dir = temp_data_dir().join("nested").join("deeper");
        let path = settings_file_path(&dir);

        write_settings(&path, &SystemSettings::default()).expect("write");

        assert!(path.exists());
        std::fs::remove_dir_all(dir.parent().unwrap().parent().unwrap()).ok();
    }

    #[test]
    fn test_write_settings_leaves_no_temp_file_behind() {
        let dir = temp_data_dir();
        let path = settings_file_path(&dir);

        write_settings(&path, &SystemSettings::default()).expect("write");

        let leftovers: Vec<_> = std::fs::read_dir(&dir)
            .expect("read data dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_document_is_pretty_printed_with_two_space_indent() {
        let dir = temp_data_dir();
        let path = settings_file_path(&dir);

        write_settings(&path, &SystemSettings::default()).expect("write");
        let content = std::fs::read_to_string(&path).expect("read back");

        assert!(content.starts_with("{\n  \""));
        assert!(content.ends_with("}\n"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_malformed_document_returns_parse_error() {
        let dir = temp_data_dir();
        std::fs::create_dir_all(&dir).expect("create dir");
        let path = settings_file_path(&dir);
        std::fs::write(&path, "{ definitely not valid json").expect("plant bad file");

        let result = read_settings(&path);

        assert!(matches!(result, Err(SettingsFileError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_mistyped_field_returns_parse_error() {
        let dir = temp_data_dir();
        std::fs::create_dir_all(&dir).expect("create dir");
        let path = settings_file_path(&dir);
        // smtpPort must be a number.
        std::fs::write(&path, r#"{ "smtpPort": "not-a-number" }"#).expect("plant bad file");

        let result = read_settings(&path);

        assert!(matches!(result, Err(SettingsFileError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_modes_are_0644_file_and_0755_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_data_dir();
        let path = settings_file_path(&dir);

        write_settings(&path, &SystemSettings::default()).expect("write");

        let file_mode = std::fs::metadata(&path).expect("file meta").permissions().mode();
        let dir_mode = std::fs::metadata(&dir).expect("dir meta").permissions().mode();
        assert_eq!(file_mode & 0o777, 0o644);
        assert_eq!(dir_mode & 0o777, 0o755);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_existing_document_in_full() {
        let dir = temp_data_dir();
        let path = settings_file_path(&dir);

        let mut first = SystemSettings::default();
        first.system_summary = "x".repeat(10_000); // make the first file large
        write_settings(&path, &first).expect("first write");

        let second = SystemSettings::default();
        write_settings(&path, &second).expect("second write");

        let restored = read_settings(&path).expect("read").expect("file exists");
        assert_eq!(restored, second);

        std::fs::remove_dir_all(&dir).ok();
    }
}
