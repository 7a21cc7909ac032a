//! Command implementations.

pub mod paths;
pub mod show;
pub mod write;
