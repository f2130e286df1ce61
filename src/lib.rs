//! Cosmoscape - a cosmic-themed portfolio shell
//!
//! The one real computation here is the sky engine: a pure map from
//! wall-clock time to the decorative sun's screen position, which in turn
//! drives lighting for the rest of the backdrop. Everything else is page
//! content and presentation glue.

pub mod core;
pub mod sky;
pub mod backdrop;
pub mod scheduler;
pub mod site;
pub mod contact;
pub mod render;
