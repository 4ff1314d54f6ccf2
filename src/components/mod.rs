//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for wall collision
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – marker for the input-driven, camera-followed entity
//! - [`rigidbody`] – kinematic body with fixed-speed directional velocity
//! - [`sprite`] – textured quad rendering component

pub mod boxcollider;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod sprite;
