//! ECS resources made available to systems.
//!
//! Overview
//! - [`camera`] – 2D camera with smooth follow, clamped zoom, and transforms
//! - [`gameconfig`] – window/grid/player settings loaded from an INI file
//! - [`input`] – per-frame keyboard, mouse, and cursor snapshot
//! - [`mode`] – the shared edit/play application mode
//! - [`texturestore`] – loaded textures keyed by string IDs
//! - [`tilegrid`] – the authorable tile grid and its file persistence
//! - [`worldtime`] – simulation time and delta

pub mod camera;
pub mod gameconfig;
pub mod input;
pub mod mode;
pub mod texturestore;
pub mod tilegrid;
pub mod worldtime;
