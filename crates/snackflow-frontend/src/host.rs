//! The screen hosting the snackbars.
//!
//! A [`Host`] owns a [`Lifecycle`] and the observer task bound to it. Like an
//! activity, it can be sent to the background and back, or recreated, in
//! which case a new lifecycle and observer take over the same queue.

use std::sync::Arc;

use snackflow_bridge::{
    Lifecycle, LifecycleGatedObserver, LifecycleState, NotificationSurface, QueueConsumer,
    ResourceResolver,
};
use tokio::task::JoinHandle;

pub struct Host<S, R> {
    consumer: QueueConsumer,
    surface: Arc<S>,
    resolver: Arc<R>,
    min_active_state: LifecycleState,
    lifecycle: Lifecycle,
    observer: JoinHandle<()>,
}

impl<S, R> Host<S, R>
where
    S: NotificationSurface + 'static,
    R: ResourceResolver + 'static,
{
    /// Creates the screen, starts observing `consumer` and brings the screen
    /// to the foreground.
    pub fn launch(
        consumer: QueueConsumer,
        surface: Arc<S>,
        resolver: Arc<R>,
        min_active_state: LifecycleState,
    ) -> Self {
        let (lifecycle, observer) =
            Self::attach(&consumer, &surface, &resolver, min_active_state);
        let host = Self {
            consumer,
            surface,
            resolver,
            min_active_state,
            lifecycle,
            observer,
        };
        host.lifecycle.set_state(LifecycleState::Created);
        host.start();
        host
    }

    fn attach(
        consumer: &QueueConsumer,
        surface: &Arc<S>,
        resolver: &Arc<R>,
        min_active_state: LifecycleState,
    ) -> (Lifecycle, JoinHandle<()>) {
        let lifecycle = Lifecycle::new();
        let observer = LifecycleGatedObserver::new(
            consumer.clone(),
            lifecycle.watch(),
            surface.clone(),
            resolver.clone(),
        )
        .min_active_state(min_active_state);
        (lifecycle, tokio::spawn(observer.run()))
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Moves the screen to the background.
    pub fn stop(&self) {
        self.lifecycle.set_state(LifecycleState::Created);
    }

    /// Brings the screen back to the foreground.
    pub fn start(&self) {
        self.lifecycle.set_state(LifecycleState::Started);
        self.lifecycle.set_state(LifecycleState::Resumed);
    }

    /// Destroys the screen and launches a new one on the same queue.
    pub async fn recreate(&mut self) {
        self.shut_down().await;
        let (lifecycle, observer) = Self::attach(
            &self.consumer,
            &self.surface,
            &self.resolver,
            self.min_active_state,
        );
        self.lifecycle = lifecycle;
        self.observer = observer;
        self.lifecycle.set_state(LifecycleState::Created);
        self.start();
    }

    /// Destroys the screen and waits for its observer to stop.
    pub async fn destroy(mut self) {
        self.shut_down().await;
    }

    async fn shut_down(&mut self) {
        self.lifecycle.set_state(LifecycleState::Created);
        self.lifecycle.set_state(LifecycleState::Destroyed);
        if let Err(err) = (&mut self.observer).await {
            log::error!("Snackbar observer failed: {err}");
        }
    }
}
