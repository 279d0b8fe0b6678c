//! ManageSettingsUseCase: the settings store and its in-process cache.
//!
//! [`SettingsStore`] is the explicitly owned holder of the current settings
//! record.  The host application constructs exactly one, wraps it in an
//! `Arc`, and injects it wherever current settings are needed — there is no
//! process-wide global, which keeps concurrent access safe and lets every
//! test run against its own store over its own temp directory.
//!
//! # Operations
//!
//! - [`load`](SettingsStore::load) — startup: read the document, or create
//!   it from the compiled-in defaults on first run.
//! - [`save`](SettingsStore::save) — admin update: stamp the provenance
//!   timestamp and atomically replace the document.
//! - [`current`](SettingsStore::current) — read the cached record with no
//!   disk I/O.
//!
//! # Cache/disk consistency
//!
//! `save` updates the cache only *after* the document hits disk.  If
//! persistence fails, the cache still holds the previous record, so the
//! cache never advertises state that does not exist on disk.
//!
//! # Why a std `RwLock` (not an async mutex)?
//!
//! Both operations are synchronous, blocking file-system calls with no
//! suspension point, and `current()` is a short read-clone.  A `std::sync`
//! lock held for those durations is fine from any runtime; an async caller
//! that worries about blocking the executor should wrap `load`/`save` in its
//! runtime's blocking facility.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::public::PublicSettings;
use crate::domain::settings::SystemSettings;
use crate::infrastructure::storage::settings_file::{
    read_settings, settings_file_path, write_settings, SettingsFileError,
};

/// Owner of the settings document and the cached current record.
///
/// Cheap to share: wrap in an `Arc` and clone the handle.  All methods take
/// `&self`.
pub struct SettingsStore {
    /// Full path of the settings document.
    path: PathBuf,
    /// Last successfully loaded or persisted record.
    cache: RwLock<SystemSettings>,
}

impl SettingsStore {
    /// Creates a store over `<data_dir>/system_settings.json` without
    /// touching the disk.  The cache starts at the compiled-in defaults
    /// until [`load`](Self::load) or [`save`](Self::save) replaces it.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: settings_file_path(data_dir.as_ref()),
            cache: RwLock::new(SystemSettings::default()),
        }
    }

    /// Creates a store and immediately loads it — the normal startup path.
    ///
    /// # Errors
    ///
    /// Propagates any [`SettingsFileError`] from [`load`](Self::load).
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, SettingsFileError> {
        let store = Self::new(data_dir);
        store.load()?;
        Ok(store)
    }

    /// Full path of the settings document this store manages.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings record from disk.
    ///
    /// - File absent → first run: the compiled-in defaults are persisted
    ///   (via [`save`](Self::save), which also stamps the timestamp and
    ///   updates the cache) and returned.
    /// - File present and valid → the cache is overwritten with the parsed
    ///   record, which is returned.
    /// - File present but unreadable or malformed → the error is returned;
    ///   the cache keeps its previous value and the disk is left untouched,
    ///   so a transient fault can never reset a deployment to defaults.
    ///
    /// # Errors
    ///
    /// [`SettingsFileError::Io`] if the file exists but cannot be read,
    /// [`SettingsFileError::Parse`] if its contents do not match the schema.
    pub fn load(&self) -> Result<SystemSettings, SettingsFileError> {
        match read_settings(&self.path)? {
            Some(settings) => {
                *self.write_cache() = settings.clone();
                debug!(path = %self.path.display(), "settings loaded from disk");
                Ok(settings)
            }
            None => {
                info!(
                    path = %self.path.display(),
                    "no settings file found, creating one from defaults"
                );
                self.save(SystemSettings::default())
            }
        }
    }

    /// Degraded-mode load: always yields a fully populated record.
    ///
    /// On success this is [`load`](Self::load).  On failure it returns the
    /// compiled-in defaults *alongside* the error, so the caller can keep
    /// the platform running on sane values while still logging or reporting
    /// the fault.  The defaults are not cached and not written to disk.
    pub fn load_or_default(&self) -> (SystemSettings, Option<SettingsFileError>) {
        match self.load() {
            Ok(settings) => (settings, None),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "settings load failed, continuing on compiled-in defaults"
                );
                (SystemSettings::default(), Some(error))
            }
        }
    }

    /// Persists a whole-record replacement.
    ///
    /// Stamps `updated_time` to the current UTC instant — any
    /// caller-supplied value is discarded — then atomically replaces the
    /// document and finally updates the cache.  Returns the stamped record,
    /// so on success the caller's copy, the cache, and the disk are
    /// identical.
    ///
    /// # Errors
    ///
    /// [`SettingsFileError::Io`] if the directory cannot be created or the
    /// file cannot be written, [`SettingsFileError::Serialize`] if encoding
    /// fails.  On error the cache still holds the previous record.
    pub fn save(&self, mut settings: SystemSettings) -> Result<SystemSettings, SettingsFileError> {
        settings.updated_time = Utc::now();

        write_settings(&self.path, &settings)?;
        *self.write_cache() = settings.clone();

        debug!(
            path = %self.path.display(),
            updated_time = %settings.updated_time,
            "settings saved"
        );
        Ok(settings)
    }

    /// Returns a snapshot of the cached record without touching the disk.
    pub fn current(&self) -> SystemSettings {
        self.read_cache().clone()
    }

    /// Returns the browser-safe view of the cached record.
    pub fn public_view(&self) -> PublicSettings {
        PublicSettings::from(&*self.read_cache())
    }

    // A poisoned lock only means some thread panicked while holding the
    // guard; the record inside is always a complete value, so recovering
    // the guard is safe.
    fn read_cache(&self) -> RwLockReadGuard<'_, SystemSettings> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, SystemSettings> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
