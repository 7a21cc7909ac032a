//! `gltform` - operator CLI for the `.gltform` platform dotfile
//!
//! The dotfile itself is handled by [`gltform_lib`]; this crate adds:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod logging;

pub use cli::run;
