//! Core particle-field simulation library for the Farfly backdrop.
//!
//! Main components:
//! - [`particle`] — individual drifting points.
//! - [`field`] — the owning field state (particles, bounds, pointer).
//! - [`config`] — fixed constants for a field's lifetime.
//! - [`phases`] — per-frame drift and pointer-attraction passes.
//! - [`links`] — distance-based connection geometry for rendering.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod field;
pub mod links;
pub mod particle;
pub mod phases;
pub mod types;
