/// The backend state shared by every service handler.
///
/// It is wrapped in an async-friendly lock (see [`SharedState`]) so that
/// handlers can read it concurrently and occasionally write to it.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: snackflow_bridge::config::Config,
    /// Where the configuration is persisted, `None` when it could not be
    /// determined and changes are kept in memory only.
    pub config_path: Option<std::path::PathBuf>,
}

/// Thread-safe, async-friendly shared reference to the backend [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
