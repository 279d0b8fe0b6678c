//! Infrastructure layer: file-system adapters.
//!
//! Contains everything that touches the OS on behalf of the settings store —
//! currently only the JSON document persistence under `storage`.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT be
//! imported by the `domain` layer.

pub mod storage;
