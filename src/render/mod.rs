//! Frame presenters.
//!
//! Consumers of [`crate::backdrop::Frame`]; no sky logic lives here.

pub mod ansi;

pub use ansi::AnsiCanvas;
