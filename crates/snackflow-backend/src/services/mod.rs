//! Backend service handlers for frontend-driven requests.
//!
//! Handlers operate on the shared `AppContext`, perform side effects
//! (filesystem, the snackbar queue) and answer the frontend when needed.

pub mod config_service;
pub mod snackbar_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
