//! # ctf-settings
//!
//! Single-tenant system-settings store for the A1CTF web platform.
//!
//! The platform keeps its configurable presentation and operational
//! parameters — branding strings, theme, visual assets, outbound-mail
//! credentials, registration policy — in one flat record persisted as a
//! pretty-printed JSON document under the deployment's `data/` directory.
//!
//! This crate owns that record end to end:
//!
//! - **`domain`** – The [`SystemSettings`] schema with its stable camelCase
//!   wire names, the compiled-in default instance, and the credential-redacted
//!   [`PublicSettings`] view handed to browsers.
//!
//! - **`application`** – The [`SettingsStore`]: load-on-startup and
//!   save-on-update orchestration plus an in-process cache so the rest of the
//!   host application can read current settings without touching disk.
//!
//! - **`infrastructure`** – The file-system adapter: JSON encoding, atomic
//!   replace-on-save, directory creation, and the error taxonomy.
//!
//! The HTTP handlers that expose "get settings" / "update settings"
//! endpoints, the authorization layer gating them, and the engine that
//! renders the stored email templates all live elsewhere; they consume this
//! crate through the re-exports below.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the main types at the crate root so callers can write
// `ctf_settings::SettingsStore` instead of the full module path.
pub use application::manage_settings::SettingsStore;
pub use domain::public::PublicSettings;
pub use domain::settings::SystemSettings;
pub use infrastructure::storage::settings_file::{
    settings_file_path, SettingsFileError, DATA_DIR, SETTINGS_FILE_NAME,
};
