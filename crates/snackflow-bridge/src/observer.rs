//! Lifecycle-gated delivery of queued snackbars.
//!
//! [`LifecycleGatedObserver`] drains a [`QueueConsumer`] into a single
//! [`NotificationSurface`], but only while the host lifecycle is at least in
//! the configured minimum state. Each time the host becomes active the loop
//! subscribes to the queue again and starts from the current head.
//!
//! A head is acknowledged only after the surface resolved it and its callback
//! ran. When the host drops below the minimum state while a snackbar is on
//! screen, the presentation future is dropped and the head stays queued, so
//! it is shown again on the next activation and never lost.

use crate::{
    lifecycle::{LifecycleState, LifecycleWatcher},
    queue::QueueConsumer,
    request::RequestId,
    surface::{NotificationSurface, ResourceResolver, unpack_request},
};

/// Single consumer driving a notification surface from a queue.
///
/// Running two observers against the same queue is unsupported: both would
/// show the same head and its callbacks could run twice.
#[derive(Debug)]
pub struct LifecycleGatedObserver<S, R> {
    consumer: QueueConsumer,
    lifecycle: LifecycleWatcher,
    min_active_state: LifecycleState,
    surface: S,
    resolver: R,
}

impl<S, R> LifecycleGatedObserver<S, R>
where
    S: NotificationSurface,
    R: ResourceResolver,
{
    /// Creates an observer active from [`LifecycleState::Started`] upwards.
    pub fn new(consumer: QueueConsumer, lifecycle: LifecycleWatcher, surface: S, resolver: R) -> Self {
        Self {
            consumer,
            lifecycle,
            min_active_state: LifecycleState::Started,
            surface,
            resolver,
        }
    }

    /// Changes the state from which the host counts as active.
    #[must_use]
    pub fn min_active_state(mut self, state: LifecycleState) -> Self {
        self.min_active_state = state;
        self
    }

    /// Delivers snackbars until the host is destroyed.
    pub async fn run(mut self) {
        let min = self.min_active_state;
        loop {
            let Some(activation) = self.lifecycle.until_active(min).await else {
                log::debug!("Host destroyed, snackbar delivery stopped");
                return;
            };
            log::debug!("Host is at least {min:?}, delivering snackbars");

            tokio::select! {
                _ = self.lifecycle.until_inactive(activation) => {
                    log::debug!("Host dropped below {min:?}, delivery paused");
                }
                _ = drain(&self.consumer, &self.surface, &self.resolver) => {}
            }
        }
    }
}

/// Shows queued snackbars one by one, head first. Only completes by being
/// dropped.
async fn drain<S, R>(consumer: &QueueConsumer, surface: &S, resolver: &R)
where
    S: NotificationSurface,
    R: ResourceResolver,
{
    let mut pending = consumer.observe();
    loop {
        let head = pending.latest().first().cloned();
        let Some(head) = head else {
            if !pending.changed().await {
                break;
            }
            continue;
        };

        let snackbar = unpack_request(resolver, &head).await;
        log::debug!("Presenting snackbar {}", head.id());
        let in_flight = InFlight(Some(head.id()));
        let presented = surface.present(snackbar).await;
        in_flight.finish();
        match presented {
            Ok(result) => {
                // no await between these two, cancellation cannot split them
                consumer.resolve(&head, result);
                consumer.acknowledge(&head);
            }
            Err(err) => {
                log::error!(
                    "Failed to show snackbar {}, retrying on next activation: {err}",
                    head.id()
                );
                break;
            }
        }
    }

    std::future::pending::<()>().await;
}

/// Marks a presentation in progress. Dropping it before [`InFlight::finish`]
/// means the presentation was abandoned and its request stays queued.
struct InFlight(Option<RequestId>);

impl InFlight {
    fn finish(mut self) {
        self.0 = None;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(id) = self.0 {
            log::warn!("Snackbar {id} abandoned on screen, it is shown again on next activation");
        }
    }
}
