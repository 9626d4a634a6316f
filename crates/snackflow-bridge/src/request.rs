//! Snackbar requests and the builder producers use to describe them.
//!
//! A [`Snackbar`] is what a producer hands to the queue: data plus the two
//! optional callbacks. On enqueue it is split into a [`NotificationRequest`],
//! which only carries data and a stable [`RequestId`], and a [`Callbacks`]
//! entry that the queue keeps in a side-table keyed by that id.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::text::NotificationText;

/// Stable identity of a single enqueued snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Allocates a new process-wide unique identifier.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// How long a snackbar stays on screen before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarDuration {
    Short,
    Long,
    /// Stays until the user acts on it or dismisses it.
    Indefinite,
}

impl SnackbarDuration {
    /// Duration picked when the producer does not choose one: an actionable
    /// snackbar must not disappear before the user can act on it.
    pub fn default_for(has_action_label: bool) -> Self {
        if has_action_label {
            SnackbarDuration::Indefinite
        } else {
            SnackbarDuration::Short
        }
    }

    /// Maps the duration class to a timeout, `None` for [`SnackbarDuration::Indefinite`].
    pub fn timeout(&self, short: Duration, long: Duration) -> Option<Duration> {
        match self {
            SnackbarDuration::Short => Some(short),
            SnackbarDuration::Long => Some(long),
            SnackbarDuration::Indefinite => None,
        }
    }
}

/// How the notification surface finished showing a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarResult {
    /// Timed out, or the user dismissed it.
    Dismissed,
    /// The user pressed the action button.
    ActionPerformed,
}

/// A pending snackbar as seen through the queue.
///
/// Equality is identity: two requests built from identical text are still
/// different entries and are acknowledged individually.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    id: RequestId,
    message: NotificationText,
    action_label: Option<NotificationText>,
    with_dismiss_action: bool,
    duration: SnackbarDuration,
}

impl NotificationRequest {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn message(&self) -> &NotificationText {
        &self.message
    }

    pub fn action_label(&self) -> Option<&NotificationText> {
        self.action_label.as_ref()
    }

    pub fn with_dismiss_action(&self) -> bool {
        self.with_dismiss_action
    }

    pub fn duration(&self) -> SnackbarDuration {
        self.duration
    }
}

impl PartialEq for NotificationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NotificationRequest {}

/// Zero-argument callback attached to a snackbar.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Callbacks of one request, stored apart from the request data.
#[derive(Default)]
pub struct Callbacks {
    on_action_perform: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl Callbacks {
    /// Runs the callback matching `result`. Consuming `self` makes a second
    /// invocation impossible; the other callback is dropped unused.
    pub fn fire(self, result: SnackbarResult) {
        let callback = match result {
            SnackbarResult::ActionPerformed => self.on_action_perform,
            SnackbarResult::Dismissed => self.on_dismiss,
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callbacks")
            .field("on_action_perform", &self.on_action_perform.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// Builder describing a snackbar to enqueue.
///
/// ```
/// use snackflow_bridge::{NotificationQueue, Snackbar, SnackbarDuration};
///
/// let queue = NotificationQueue::new();
/// queue.enqueue(
///     Snackbar::new("Photo deleted")
///         .action_label("Undo")
///         .duration(SnackbarDuration::Long)
///         .on_action_perform(|| println!("restoring")),
/// );
/// ```
#[must_use]
pub struct Snackbar {
    message: NotificationText,
    action_label: Option<NotificationText>,
    with_dismiss_action: bool,
    duration: Option<SnackbarDuration>,
    callbacks: Callbacks,
}

impl Snackbar {
    pub fn new(message: impl Into<NotificationText>) -> Self {
        Self {
            message: message.into(),
            action_label: None,
            with_dismiss_action: false,
            duration: None,
            callbacks: Callbacks::default(),
        }
    }

    /// Label of the action button shown next to the message.
    pub fn action_label(mut self, label: impl Into<NotificationText>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Shows a dismiss button. Recommended together with
    /// [`SnackbarDuration::Indefinite`] for accessibility.
    pub fn with_dismiss_action(mut self, with_dismiss_action: bool) -> Self {
        self.with_dismiss_action = with_dismiss_action;
        self
    }

    /// Overrides the default duration policy.
    pub fn duration(mut self, duration: SnackbarDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Called when the user presses the action button.
    pub fn on_action_perform(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.callbacks.on_action_perform = Some(Box::new(callback));
        self
    }

    /// Called when the snackbar times out or is dismissed by the user.
    pub fn on_dismiss(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.callbacks.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Assigns a fresh identity and separates the data from the callbacks.
    pub fn into_parts(self) -> (NotificationRequest, Callbacks) {
        let duration = self
            .duration
            .unwrap_or_else(|| SnackbarDuration::default_for(self.action_label.is_some()));
        let request = NotificationRequest {
            id: RequestId::next(),
            message: self.message,
            action_label: self.action_label,
            with_dismiss_action: self.with_dismiss_action,
            duration,
        };
        (request, self.callbacks)
    }
}

impl From<Snackbar> for NotificationRequest {
    fn from(snackbar: Snackbar) -> Self {
        snackbar.into_parts().0
    }
}
