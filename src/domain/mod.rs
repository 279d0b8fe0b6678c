//! Domain layer: the settings schema and its views.
//!
//! Pure data definitions with no file-system or network access.  The
//! `settings` module is the single source of truth for what the platform
//! considers configurable; `public` derives the browser-safe subset.
//!
//! **Dependency rule**: this layer may be imported by `application` and
//! `infrastructure`, but MUST NOT import either of them.

pub mod public;
pub mod settings;
