//! Console frontend of the snackbar demo.
//!
//! The frontend plays the part of the UI: it reads the configuration from
//! the backend, hosts a [`LifecycleGatedObserver`](snackflow_bridge::LifecycleGatedObserver)
//! driving a [`ConsoleSurface`], and turns typed lines into demo button
//! presses, snackbar answers and lifecycle transitions.

use std::sync::Arc;

use anyhow::Context;
use snackflow_bridge::{
    MessageFromBackend, MessageToBackend, QueueConsumer, config::Config, showcase::Showcase,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    command::Command,
    host::Host,
    resources::{LocalizedResources, StringTable},
    surface::{ConsoleSurface, SurfaceInput},
};

pub mod command;
pub mod formatting;
pub mod host;
pub mod resources;
pub mod surface;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) -> anyhow::Result<()> {
        self.to_backend
            .send(MessageToBackend::ConfigurationRequest)
            .await
            .context("failed to request config")
    }

    pub async fn show_snackbar(&self, showcase: Showcase) -> anyhow::Result<()> {
        self.to_backend
            .send(MessageToBackend::ShowSnackbar(showcase))
            .await
            .context("failed to request a snackbar")
    }

    pub async fn select_locale(&self, locale: String) -> anyhow::Result<()> {
        self.to_backend
            .send(MessageToBackend::SelectLocale(locale))
            .await
            .context("failed to select the locale")
    }
}

/// Waits for the backend's answer to a configuration request.
async fn receive_config(rx: &mut mpsc::Receiver<MessageFromBackend>) -> anyhow::Result<Config> {
    while let Some(message) = rx.recv().await {
        match message {
            MessageFromBackend::ConfigurationResponse(config) => return Ok(config),
            other => log::debug!("Skipping backend message while starting: {other:?}"),
        }
    }
    anyhow::bail!("backend closed before sending the configuration")
}

fn handle_backend_message(message: MessageFromBackend, resources: &LocalizedResources) {
    match message {
        MessageFromBackend::ConfigurationResponse(config) => resources.set_locale(&config.locale),
        MessageFromBackend::CallbackCountersUpdate {
            action_performed,
            dismissed,
        } => println!(
            "{}",
            formatting::format_counters(action_performed, dismissed)
        ),
    }
}

async fn run_console(
    consumer: QueueConsumer,
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let bridge = BackendBridge { to_backend: tx };
    bridge.request_config().await?;
    let config = receive_config(&mut rx).await?;
    log::debug!("Got configuration from backend: {config:?}");

    let resources = Arc::new(LocalizedResources::new(
        StringTable::bundled()?,
        config.locale.clone(),
    ));
    let (inputs, inputs_rx) = mpsc::channel(8);
    let surface = Arc::new(ConsoleSurface::new(inputs_rx, config.snackbar.clone()));
    let mut host = Host::launch(
        consumer,
        surface.clone(),
        resources.clone(),
        config.snackbar.min_active_state,
    );

    println!("{}", formatting::format_menu());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            message = rx.recv() => match message {
                Some(message) => handle_backend_message(message, &resources),
                None => {
                    log::warn!("Backend closed the bridge");
                    break;
                }
            },
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };

                match command {
                    Command::Show(showcase) => bridge.show_snackbar(showcase).await?,
                    Command::PerformAction | Command::Dismiss if !surface.is_visible() => {
                        println!("No snackbar on screen");
                    }
                    Command::PerformAction => inputs.send(SurfaceInput::PerformAction).await?,
                    Command::Dismiss => inputs.send(SurfaceInput::Dismiss).await?,
                    Command::Stop => host.stop(),
                    Command::Start => host.start(),
                    Command::Rotate => host.recreate().await,
                    Command::Locale(locale) if !resources.table().supports(&locale) => {
                        println!(
                            "Unknown locale `{locale}`, available: {}",
                            resources.table().locales().join(", ")
                        );
                    }
                    Command::Locale(locale) => bridge.select_locale(locale).await?,
                    Command::Help => println!("{}", formatting::format_menu()),
                    Command::Quit => break,
                }
            }
        }
    }

    host.destroy().await;
    Ok(())
}

/// Runs the console frontend on the current thread until the user quits.
/// Snackbars are taken from `consumer`.
pub fn run(
    consumer: QueueConsumer,
    rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build frontend runtime")?;
    runtime.block_on(run_console(consumer, rx, tx))
}
