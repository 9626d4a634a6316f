use snackflow_bridge::{BridgeChannels, NotificationQueue};

fn main() -> anyhow::Result<()> {
    // the console doubles as the UI, keep it quiet unless RUST_LOG asks otherwise
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    let queue = NotificationQueue::new();
    let consumer = queue.consumer();

    let channels = BridgeChannels::default();
    let backend = snackflow_backend::run(queue, channels.backend_rx, channels.backend_tx);
    snackflow_frontend::run(consumer, channels.frontend_rx, channels.frontend_tx)?;

    if backend.join().is_err() {
        log::error!("Backend thread panicked");
    }
    Ok(())
}
