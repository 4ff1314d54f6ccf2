//! Event types and observers.
//!
//! Submodules:
//! - [`mode`] – edit/play transition notifications and their logging observer

pub mod mode;
