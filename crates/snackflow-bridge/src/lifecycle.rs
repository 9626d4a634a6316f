use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// States of a UI host, ordered from least to most active.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Terminal state, the host will never become active again.
    Destroyed,
    #[default]
    Initialized,
    Created,
    /// Visible on screen.
    Started,
    /// Visible and focused.
    Resumed,
}

impl LifecycleState {
    const ALL: [LifecycleState; 5] = [
        LifecycleState::Destroyed,
        LifecycleState::Initialized,
        LifecycleState::Created,
        LifecycleState::Started,
        LifecycleState::Resumed,
    ];

    pub fn is_at_least(self, min: LifecycleState) -> bool {
        self >= min
    }

    fn level(self) -> usize {
        self as usize
    }
}

/// Latest lifecycle value published to watchers.
///
/// `departures[level]` counts how often the host dropped below `level`, so a
/// watcher can tell it was deactivated even when it is active again by the
/// time the watcher runs.
#[derive(Debug, Clone, Copy, Default)]
struct Published {
    state: LifecycleState,
    departures: [u64; LifecycleState::ALL.len()],
}

/// Owner side of a UI host lifecycle.
///
/// Cloning yields another handle to the same lifecycle. Once every handle is
/// dropped, watchers treat the host as destroyed.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    published: Arc<watch::Sender<Published>>,
}

impl Lifecycle {
    /// Creates a lifecycle in [`LifecycleState::Initialized`].
    pub fn new() -> Self {
        let (published, _) = watch::channel(Published::default());
        Self {
            published: Arc::new(published),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.published.borrow().state
    }

    /// Moves the host to `next`. Returns `false` if nothing changed, which is
    /// always the case once the host is destroyed.
    pub fn set_state(&self, next: LifecycleState) -> bool {
        self.published.send_if_modified(|published| {
            let previous = published.state;
            if previous == LifecycleState::Destroyed {
                log::warn!("Ignoring lifecycle transition to {next:?} after destruction");
                return false;
            }
            if previous == next {
                return false;
            }

            log::info!("Lifecycle {previous:?} -> {next:?}");
            for level in LifecycleState::ALL {
                if previous.is_at_least(level) && !next.is_at_least(level) {
                    published.departures[level.level()] += 1;
                }
            }
            published.state = next;
            true
        })
    }

    /// Subscribes to lifecycle transitions.
    pub fn watch(&self) -> LifecycleWatcher {
        LifecycleWatcher(self.published.subscribe())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// One period during which the host stayed at least in `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    min: LifecycleState,
    departures: u64,
}

/// Observer side of a [`Lifecycle`].
#[derive(Debug, Clone)]
pub struct LifecycleWatcher(watch::Receiver<Published>);

impl LifecycleWatcher {
    /// Waits until the host is at least in `min`.
    ///
    /// Returns `None` when the host gets destroyed (or its lifecycle is
    /// dropped) instead; it will never become active again.
    pub async fn until_active(&mut self, min: LifecycleState) -> Option<Activation> {
        let published = self
            .0
            .wait_for(|published| {
                published.state == LifecycleState::Destroyed || published.state.is_at_least(min)
            })
            .await
            .ok()?;

        (published.state != LifecycleState::Destroyed).then(|| Activation {
            min,
            departures: published.departures[min.level()],
        })
    }

    /// Waits until `activation` is over: the host dropped below its minimum
    /// state, possibly coming back since, or its lifecycle was dropped.
    pub async fn until_inactive(&mut self, activation: Activation) {
        let min = activation.min;
        let _ = self
            .0
            .wait_for(|published| {
                !published.state.is_at_least(min)
                    || published.departures[min.level()] != activation.departures
            })
            .await;
    }
}
