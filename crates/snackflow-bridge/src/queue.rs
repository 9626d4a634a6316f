//! The pending-snackbar queue.
//!
//! The queue is split in two roles:
//! - [`NotificationQueue`] is owned by the producer side (a view-model) and is
//!   the only handle that can enqueue.
//! - [`QueueConsumer`] is handed to the UI side. It observes the pending list,
//!   runs callbacks for results and acknowledges shown snackbars, but cannot
//!   enqueue.
//!
//! The pending list is published through a [`tokio::sync::watch`] channel as
//! an immutable [`Pending`] snapshot, replaced on every mutation. Subscribers
//! always start from the current list.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::sync::watch;

use crate::request::{Callbacks, NotificationRequest, RequestId, Snackbar, SnackbarResult};

/// Immutable snapshot of the pending snackbars, head first.
pub type Pending = Arc<[NotificationRequest]>;

#[derive(Debug)]
struct Shared {
    pending: watch::Sender<Pending>,
    callbacks: Mutex<HashMap<RequestId, Callbacks>>,
}

impl Shared {
    fn callbacks(&self) -> MutexGuard<'_, HashMap<RequestId, Callbacks>> {
        self.callbacks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observe(&self) -> PendingReceiver {
        PendingReceiver(self.pending.subscribe())
    }

    fn snapshot(&self) -> Pending {
        self.pending.borrow().clone()
    }

    fn acknowledge(&self, id: RequestId) -> bool {
        let removed = self.pending.send_if_modified(|pending| {
            let Some(position) = pending.iter().position(|request| request.id() == id) else {
                return false;
            };
            let mut next = pending.to_vec();
            next.remove(position);
            *pending = next.into();
            true
        });
        self.callbacks().remove(&id);

        if removed {
            log::debug!("Acknowledged snackbar {id}");
        } else {
            log::trace!("Snackbar {id} was already acknowledged");
        }
        removed
    }

    fn resolve(&self, id: RequestId, result: SnackbarResult) -> bool {
        // the guard must be released before the callback runs, it may enqueue
        let callbacks = self.callbacks().remove(&id);
        match callbacks {
            Some(callbacks) => {
                log::debug!("Snackbar {id} resolved as {result:?}");
                callbacks.fire(result);
                true
            }
            None => false,
        }
    }
}

/// Ordered, unbounded FIFO of snackbars waiting to be shown.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    shared: Arc<Shared>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let (pending, _) = watch::channel(Pending::from(Vec::new()));
        Self {
            shared: Arc::new(Shared {
                pending,
                callbacks: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Appends a snackbar to the tail of the queue and returns its identity.
    ///
    /// Never fails. Every observer receives the updated list.
    pub fn enqueue(&self, snackbar: Snackbar) -> RequestId {
        let (request, callbacks) = snackbar.into_parts();
        let id = request.id();

        // callbacks go in first so an observer never sees a request without them
        self.shared.callbacks().insert(id, callbacks);
        self.shared.pending.send_modify(|pending| {
            let mut next = pending.to_vec();
            next.push(request);
            *pending = next.into();
        });

        log::debug!("Enqueued snackbar {id}");
        id
    }

    /// Subscribes to the pending list. The receiver starts at the current list.
    pub fn observe(&self) -> PendingReceiver {
        self.shared.observe()
    }

    /// The current pending list.
    pub fn snapshot(&self) -> Pending {
        self.shared.snapshot()
    }

    /// Removes `request` from the queue.
    ///
    /// Returns `false` without emitting anything when the request is not
    /// pending, e.g. because it was already acknowledged.
    pub fn acknowledge(&self, request: &NotificationRequest) -> bool {
        self.shared.acknowledge(request.id())
    }

    /// Read-only view of this queue for the UI side.
    pub fn consumer(&self) -> QueueConsumer {
        QueueConsumer {
            shared: self.shared.clone(),
        }
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-side handle of a [`NotificationQueue`].
#[derive(Debug, Clone)]
pub struct QueueConsumer {
    shared: Arc<Shared>,
}

impl QueueConsumer {
    /// Subscribes to the pending list. The receiver starts at the current list.
    pub fn observe(&self) -> PendingReceiver {
        self.shared.observe()
    }

    /// The current pending list.
    pub fn snapshot(&self) -> Pending {
        self.shared.snapshot()
    }

    /// Runs the callback of `request` matching `result`.
    ///
    /// Returns `false` if the callbacks of this request were already consumed
    /// or the request was acknowledged before.
    pub fn resolve(&self, request: &NotificationRequest, result: SnackbarResult) -> bool {
        self.shared.resolve(request.id(), result)
    }

    /// Removes a shown `request` from the queue. See [`NotificationQueue::acknowledge`].
    pub fn acknowledge(&self, request: &NotificationRequest) -> bool {
        self.shared.acknowledge(request.id())
    }
}

/// Read-only subscription to the pending list.
#[derive(Debug, Clone)]
pub struct PendingReceiver(watch::Receiver<Pending>);

impl PendingReceiver {
    /// Returns the latest list and marks it as seen.
    pub fn latest(&mut self) -> Pending {
        self.0.borrow_and_update().clone()
    }

    /// Waits until the list changes after the last [`PendingReceiver::latest`].
    ///
    /// Returns `false` once the queue is gone.
    pub async fn changed(&mut self) -> bool {
        self.0.changed().await.is_ok()
    }

    /// Waits until the list satisfies `condition`, checking the current list
    /// first. Returns `None` once the queue is gone.
    pub async fn wait_for(
        &mut self,
        mut condition: impl FnMut(&[NotificationRequest]) -> bool,
    ) -> Option<Pending> {
        self.0
            .wait_for(|pending| condition(pending))
            .await
            .ok()
            .map(|pending| Pending::clone(&pending))
    }
}
