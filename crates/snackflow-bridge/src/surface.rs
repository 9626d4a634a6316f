//! Capabilities the UI side plugs into the delivery loop.

use std::{future::Future, sync::Arc};

use crate::{
    request::{NotificationRequest, RequestId, SnackbarDuration, SnackbarResult},
    text::{NotificationText, ResourceId},
};

/// A snackbar with all of its text resolved, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedSnackbar {
    pub id: RequestId,
    pub message: String,
    pub action_label: Option<String>,
    pub with_dismiss_action: bool,
    pub duration: SnackbarDuration,
}

/// Errors reported by a [`NotificationSurface`].
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The surface can no longer show anything, e.g. its window is gone.
    #[error("notification surface is closed")]
    Closed,
    /// Any other failure while showing a snackbar.
    #[error("notification surface failed: {0}")]
    Failed(String),
}

/// Errors reported by a [`ResourceResolver`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The string table has no entry for this resource.
    #[error("no string for resource `{id}` in locale `{locale}`")]
    Missing { id: ResourceId, locale: String },
}

/// The widget that actually shows snackbars, one at a time.
pub trait NotificationSurface: Send + Sync {
    /// Shows `snackbar` and completes once it is gone.
    ///
    /// The returned future may be dropped before completion when the host
    /// stops being active; the snackbar must then be taken off screen.
    fn present(
        &self,
        snackbar: PresentedSnackbar,
    ) -> impl Future<Output = Result<SnackbarResult, SurfaceError>> + Send;
}

/// Turns [`ResourceId`]s into localized strings.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, id: ResourceId) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

impl<S: NotificationSurface> NotificationSurface for Arc<S> {
    fn present(
        &self,
        snackbar: PresentedSnackbar,
    ) -> impl Future<Output = Result<SnackbarResult, SurfaceError>> + Send {
        self.as_ref().present(snackbar)
    }
}

impl<R: ResourceResolver> ResourceResolver for Arc<R> {
    fn resolve(&self, id: ResourceId) -> impl Future<Output = Result<String, ResolveError>> + Send {
        self.as_ref().resolve(id)
    }
}

/// Resolves `text`, falling back to the resource key when it has no string.
pub async fn unpack_text<R: ResourceResolver>(resolver: &R, text: &NotificationText) -> String {
    match text {
        NotificationText::Literal(value) => value.clone(),
        NotificationText::Resource(id) => match resolver.resolve(*id).await {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Showing raw resource key: {err}");
                id.key().to_string()
            }
        },
    }
}

/// Resolves every text of `request` for display.
pub async fn unpack_request<R: ResourceResolver>(
    resolver: &R,
    request: &NotificationRequest,
) -> PresentedSnackbar {
    let message = unpack_text(resolver, request.message()).await;
    let action_label = match request.action_label() {
        Some(label) => Some(unpack_text(resolver, label).await),
        None => None,
    };

    PresentedSnackbar {
        id: request.id(),
        message,
        action_label,
        with_dismiss_action: request.with_dismiss_action(),
        duration: request.duration(),
    }
}
