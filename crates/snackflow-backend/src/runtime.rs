//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the view-model
//! and the message dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use snackflow_bridge::{MessageFromBackend, MessageToBackend, NotificationQueue, config::Config};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::State;
use crate::view_model::AppViewModel;

/// Loads the persisted configuration, falling back to defaults when it
/// cannot be read.
async fn load_state() -> State {
    let config_path = match crate::config::default_config_path() {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("{err}, configuration will not be persisted");
            None
        }
    };

    let config = match &config_path {
        Some(path) => crate::config::load_config(path).await.unwrap_or_else(|err| {
            log::error!("Using default configuration: {err}");
            Config::default()
        }),
        None => Config::default(),
    };

    State {
        config,
        config_path,
    }
}

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(
    queue: NotificationQueue,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) {
    let state = Arc::new(RwLock::new(load_state().await));
    let context = Arc::new(AppContext {
        state,
        view_model: AppViewModel::new(queue),
        tx,
    });

    context.spawn_counter_forwarding();
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages. Snackbars
/// requested by the frontend are pushed into `queue`.
pub fn run(
    queue: NotificationQueue,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("Failed to build backend runtime: {err}");
                return;
            }
        };
        runtime.block_on(setup_backend(queue, rx, tx));
    })
}
