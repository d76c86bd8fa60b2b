
//! Kitchengen is a configuration and glue crate that composes simulation-ready MuJoCo
//! kitchen scenes for manipulation benchmarks.  It resolves a kitchen layout and visual
//! style, applies task-specific object placements from a benchmark scene provider,
//! strips the provider's default robot and control surface from the scene, and splices
//! in a substitute robot description at a configurable spawn pose.  The optional
//! `mujoco` feature compiles composed documents into engine model handles.

pub mod kitchen_modules;
pub mod utils;
