//! CLI command implementations

pub mod resolve;
pub mod write;

pub use resolve::execute as resolve;
pub use write::execute as write;
