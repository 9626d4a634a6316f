//! Lifecycle-aware snackbar queue and the bridge between view-models and UI.
//!
//! Producers (view-models, services) describe snackbars with [`Snackbar`] and
//! push them into a [`NotificationQueue`] without knowing anything about the
//! UI. The UI side receives a read-only [`QueueConsumer`] and runs a
//! [`LifecycleGatedObserver`], which shows one snackbar at a time on a
//! [`NotificationSurface`] while the host [`Lifecycle`] is active, and
//! acknowledges each one only after it was resolved. Snackbars are therefore
//! neither dropped nor shown twice when the UI detaches and reattaches.
//!
//! Besides the queue, the crate defines the message protocol of the demo
//! application: the frontend sends [`MessageToBackend`] commands, the backend
//! pushes [`MessageFromBackend`] events, both over bounded
//! [`tokio::sync::mpsc`] channels wrapped in [`BridgeChannels`].

pub mod config;
pub mod lifecycle;
pub mod observer;
pub mod queue;
pub mod request;
pub mod showcase;
pub mod surface;
pub mod text;

pub use lifecycle::{Activation, Lifecycle, LifecycleState, LifecycleWatcher};
pub use observer::LifecycleGatedObserver;
pub use queue::{NotificationQueue, Pending, PendingReceiver, QueueConsumer};
pub use request::{NotificationRequest, RequestId, Snackbar, SnackbarDuration, SnackbarResult};
pub use surface::{
    NotificationSurface, PresentedSnackbar, ResolveError, ResourceResolver, SurfaceError,
};
pub use text::{NotificationText, ResourceId};

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// How many times the demo callbacks have run so far.
    CallbackCountersUpdate {
        /// Number of `on_action_perform` invocations.
        action_performed: u32,
        /// Number of `on_dismiss` invocations.
        dismissed: u32,
    },
}

/// Commands issued by the frontend to the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// A demo button was pressed.
    ShowSnackbar(showcase::Showcase),
    /// Switch string resources to another locale and persist the choice.
    SelectLocale(String),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
