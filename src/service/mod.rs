//! Service layer for render orchestration
//!
//! Keeps the compose → render → write sequence out of the CLI layer in main.rs.

pub mod render;

pub use render::{RenderConfig, RenderResult, RenderService};
