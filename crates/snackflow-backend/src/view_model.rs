//! The demo screen's view-model.
//!
//! It owns the snackbar queue by composition and forwards the producer calls;
//! the UI only ever sees the read-only [`QueueConsumer`].

use std::sync::Arc;

use snackflow_bridge::{
    NotificationQueue, QueueConsumer, Snackbar, SnackbarDuration,
    showcase::{Showcase, strings},
};
use tokio::sync::watch;

/// Producer side of the demo: one method per demo button, plus counters of
/// how many times the demo callbacks ran.
#[derive(Debug, Clone)]
pub struct AppViewModel {
    snackbars: NotificationQueue,
    on_action_perform_called: Arc<watch::Sender<u32>>,
    on_dismiss_called: Arc<watch::Sender<u32>>,
}

impl AppViewModel {
    pub fn new(snackbars: NotificationQueue) -> Self {
        Self {
            snackbars,
            on_action_perform_called: Arc::new(watch::channel(0).0),
            on_dismiss_called: Arc::new(watch::channel(0).0),
        }
    }

    /// The queue as seen by the UI.
    pub fn snackbars(&self) -> QueueConsumer {
        self.snackbars.consumer()
    }

    pub fn on_action_perform_called(&self) -> watch::Receiver<u32> {
        self.on_action_perform_called.subscribe()
    }

    pub fn on_dismiss_called(&self) -> watch::Receiver<u32> {
        self.on_dismiss_called.subscribe()
    }

    /// Enqueues the snackbar of a demo button.
    pub fn show(&self, showcase: Showcase) {
        match showcase {
            Showcase::StringResource => self.snackbar_with_string_resource(),
            Showcase::StringLiteral => self.snackbar_with_string_literal(),
            Showcase::MixedStringTypes => self.snackbar_with_mixed_string_types(),
            Showcase::WithAction => self.snackbar_with_action(),
            Showcase::WithDismissAction => self.snackbar_with_dismiss_action(),
            Showcase::WithOnActionPerformCallback => {
                self.snackbar_with_on_action_perform_callback()
            }
            Showcase::WithOnDismissCallback => self.snackbar_with_on_dismiss_callback(),
            Showcase::Indefinite => self.indefinite_snackbar(),
        }
    }

    pub fn snackbar_with_string_resource(&self) {
        self.snackbars.enqueue(Snackbar::new(strings::HELLO));
    }

    pub fn snackbar_with_string_literal(&self) {
        self.snackbars.enqueue(Snackbar::new("hey"));
    }

    pub fn snackbar_with_mixed_string_types(&self) {
        self.snackbars
            .enqueue(Snackbar::new("မင်္ဂလာပါ").action_label(strings::OK));
    }

    pub fn snackbar_with_action(&self) {
        self.snackbars
            .enqueue(Snackbar::new(strings::HELLO).action_label(strings::OK));
    }

    pub fn snackbar_with_dismiss_action(&self) {
        self.snackbars
            .enqueue(Snackbar::new(strings::HELLO).with_dismiss_action(true));
    }

    pub fn snackbar_with_on_action_perform_callback(&self) {
        let counter = self.on_action_perform_called.clone();
        self.snackbars.enqueue(
            Snackbar::new(strings::HELLO)
                .action_label(strings::OK)
                .on_action_perform(move || counter.send_modify(|count| *count += 1)),
        );
    }

    pub fn snackbar_with_on_dismiss_callback(&self) {
        let counter = self.on_dismiss_called.clone();
        self.snackbars.enqueue(
            Snackbar::new(strings::HELLO)
                .on_dismiss(move || counter.send_modify(|count| *count += 1)),
        );
    }

    pub fn indefinite_snackbar(&self) {
        self.snackbars.enqueue(
            Snackbar::new(strings::HELLO)
                .with_dismiss_action(true)
                .duration(SnackbarDuration::Indefinite),
        );
    }
}
