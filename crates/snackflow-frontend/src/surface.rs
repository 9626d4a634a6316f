//! Snackbar surface printing to the terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use snackflow_bridge::{
    NotificationSurface, PresentedSnackbar, SnackbarResult, SurfaceError, config::SnackbarConfig,
};
use tokio::sync::{Mutex, mpsc};

use crate::formatting::format_snackbar;

/// A key pressed while a snackbar is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceInput {
    PerformAction,
    Dismiss,
}

/// Shows one snackbar at a time on stdout and waits for user input or the
/// auto-dismiss timeout.
#[derive(Debug)]
pub struct ConsoleSurface {
    inputs: Mutex<mpsc::Receiver<SurfaceInput>>,
    timing: SnackbarConfig,
    visible: AtomicBool,
}

impl ConsoleSurface {
    pub fn new(inputs: mpsc::Receiver<SurfaceInput>, timing: SnackbarConfig) -> Self {
        Self {
            inputs: Mutex::new(inputs),
            timing,
            visible: AtomicBool::new(false),
        }
    }

    /// Whether a snackbar is currently on screen.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// Takes the snackbar off screen when the presentation ends, even when it
/// was abandoned.
struct OnScreen<'a>(&'a AtomicBool);

impl Drop for OnScreen<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl NotificationSurface for ConsoleSurface {
    async fn present(&self, snackbar: PresentedSnackbar) -> Result<SnackbarResult, SurfaceError> {
        let mut inputs = self.inputs.lock().await;
        println!("{}", format_snackbar(&snackbar));
        self.visible.store(true, Ordering::SeqCst);
        let _on_screen = OnScreen(&self.visible);

        let has_action = snackbar.action_label.is_some();
        let answer = async {
            loop {
                match inputs.recv().await {
                    Some(SurfaceInput::PerformAction) if has_action => {
                        return Ok(SnackbarResult::ActionPerformed);
                    }
                    Some(SurfaceInput::Dismiss) => return Ok(SnackbarResult::Dismissed),
                    Some(input) => log::debug!("Snackbar {} ignores {input:?}", snackbar.id),
                    None => return Err(SurfaceError::Closed),
                }
            }
        };

        match self.timing.timeout_for(snackbar.duration) {
            Some(timeout) => tokio::time::timeout(timeout, answer)
                .await
                .unwrap_or(Ok(SnackbarResult::Dismissed)),
            None => answer.await,
        }
    }
}
