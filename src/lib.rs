//! Verstamp - Version Resolution and Value Stamping
//!
//! Resolves a project's version string from source-control history with a
//! cached-file fallback, and writes computed values into build output files.

pub mod cli;
pub mod config;
pub mod error;
pub mod version;
pub mod writer;

pub use error::{VerstampError, VerstampResult};
