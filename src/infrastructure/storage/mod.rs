//! Storage infrastructure: settings file persistence.
//!
//! This module is a thin adapter between the application layer and the file
//! system.  The `settings_file` sub-module handles:
//!
//! - Reading the JSON settings document from the deployment's data directory.
//! - Writing changes back to disk atomically when an administrator saves.
//! - Distinguishing "no file yet" (first run) from genuine I/O failures.
//!
//! Keeping storage concerns here — rather than scattered throughout the
//! application — means the file format or location can change without
//! touching any other part of the codebase.

pub mod settings_file;
