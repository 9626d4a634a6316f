//! Backend runtime entry point and public API surface.
//!
//! This crate owns the demo's view-model, routes bridge messages to services,
//! and persists the configuration the frontend reads.

mod app;
mod config;
mod runtime;
mod services;
mod state;
pub mod view_model;

pub use crate::config::{ConfigError, default_config_path, load_config, save_config};
pub use crate::runtime::run;
pub use crate::view_model::AppViewModel;
