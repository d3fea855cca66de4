//! Stateful components of a comparison run
//!
//! - `archive`: an archive on disk and the entries read from it
//! - `reports`: report directory and atomic report writes
//! - `session`: run configuration and console writer
//! - `workspace`: input detection and archive discovery in directories

pub mod archive;
pub mod reports;
pub mod session;
pub mod workspace;
