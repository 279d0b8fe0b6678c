//! Application layer: settings orchestration.
//!
//! Sits between the pure schema in `domain` and the file system in
//! `infrastructure`.  The single use case here is `manage_settings`: keep
//! one authoritative in-process copy of the settings record, load it at
//! startup, and persist whole-record replacements on behalf of the admin
//! surface.

pub mod manage_settings;
