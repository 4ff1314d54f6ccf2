//! Gridbound library.
//!
//! Exposes the components, resources, systems, and events of the sandbox
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod mathutils;
pub mod resources;
pub mod systems;
