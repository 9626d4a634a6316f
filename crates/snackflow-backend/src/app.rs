//! Application context and message dispatching utilities.
//!
//! The context holds the shared state and the view-model, and provides
//! helpers for sending responses back to the frontend bridge.

use std::sync::Arc;

use snackflow_bridge::{MessageFromBackend, MessageToBackend};
use tokio::{
    sync::mpsc::{Receiver, Sender},
    task::JoinHandle,
};

use crate::services;
use crate::state::SharedState;
use crate::view_model::AppViewModel;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Producer of the demo snackbars.
    pub view_model: AppViewModel,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
        log::info!("Frontend bridge closed, backend is shutting down");
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::SelectLocale(locale) => {
                services::config_service::handle_locale_selection(self.clone(), locale).await;
            }
            MessageToBackend::ShowSnackbar(showcase) => {
                services::snackbar_service::handle_show_snackbar(self.clone(), showcase);
            }
        }
    }

    /// Pushes the callback counters to the frontend every time one of them
    /// changes, until either side goes away. Changes made after this call
    /// returns are never missed.
    pub fn spawn_counter_forwarding(self: &Arc<Self>) -> JoinHandle<()> {
        let mut action_performed = self.view_model.on_action_perform_called();
        let mut dismissed = self.view_model.on_dismiss_called();
        let context = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = action_performed.changed() => if changed.is_err() { break },
                    changed = dismissed.changed() => if changed.is_err() { break },
                }

                let update = MessageFromBackend::CallbackCountersUpdate {
                    action_performed: *action_performed.borrow_and_update(),
                    dismissed: *dismissed.borrow_and_update(),
                };
                if !context.send(update).await {
                    break;
                }
            }
        })
    }

    /// Send a message to the frontend bridge. Returns `false` when the
    /// frontend is gone.
    pub async fn send(&self, message: MessageFromBackend) -> bool {
        match self.tx.send(message).await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send message to frontend: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use snackflow_bridge::{
        NotificationQueue, SnackbarResult, config::Config, showcase::Showcase,
    };
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::state::State;

    fn context() -> (Arc<AppContext>, NotificationQueue, Receiver<MessageFromBackend>) {
        let queue = NotificationQueue::new();
        let (tx, rx) = mpsc::channel(8);
        let context = Arc::new(AppContext {
            state: Arc::new(RwLock::new(State {
                config: Config::default(),
                config_path: None,
            })),
            view_model: AppViewModel::new(queue.clone()),
            tx,
        });
        (context, queue, rx)
    }

    #[tokio::test]
    async fn show_snackbar_enqueues_request() {
        let (context, queue, _rx) = context();
        context
            .dispatch_message(MessageToBackend::ShowSnackbar(Showcase::StringLiteral))
            .await;

        let pending = queue.snapshot();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message().as_literal(), Some("hey"));
    }

    #[tokio::test]
    async fn configuration_request_is_answered() {
        let (context, _queue, mut rx) = context();
        context
            .dispatch_message(MessageToBackend::ConfigurationRequest)
            .await;

        match rx.recv().await {
            Some(MessageFromBackend::ConfigurationResponse(config)) => {
                assert_eq!(config, Config::default());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn selected_locale_is_kept_in_memory_without_path() {
        let (context, _queue, mut rx) = context();
        context
            .dispatch_message(MessageToBackend::SelectLocale("my".to_string()))
            .await;

        match rx.recv().await {
            Some(MessageFromBackend::ConfigurationResponse(config)) => {
                assert_eq!(config.locale, "my");
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(context.state.read().await.config.locale, "my");
    }

    #[tokio::test]
    async fn callback_counters_are_forwarded() {
        let (context, queue, mut rx) = context();
        context.spawn_counter_forwarding();
        context
            .dispatch_message(MessageToBackend::ShowSnackbar(
                Showcase::WithOnDismissCallback,
            ))
            .await;

        let consumer = queue.consumer();
        let head = consumer.snapshot()[0].clone();
        consumer.resolve(&head, SnackbarResult::Dismissed);

        match rx.recv().await {
            Some(MessageFromBackend::CallbackCountersUpdate {
                action_performed,
                dismissed,
            }) => assert_eq!((action_performed, dismissed), (0, 1)),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_reports_closed_frontend() {
        let (context, _queue, rx) = context();
        drop(rx);
        assert!(!context.send(MessageFromBackend::ConfigurationResponse(Config::default())).await);
    }
}
