pub mod cli;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod icon;
pub mod render;
pub mod service;
pub mod status;
pub mod view;

pub use anyhow::Result;
