//! Backdrop — headless frontend for the background color controller.
//!
//! Reads one JSON `UiToApp` message per line on stdin and writes `AppToUi`
//! messages as JSON lines on stdout. Logs go to stderr (`RUST_LOG`).

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use backdrop_app::{
    AppConfig, AppToUi, ColorController, FileStore, KeyValueStore, MemoryStore, PickerHandle,
    UiToApp, event_channel,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::default();
    if config.in_memory {
        tracing::info!("Using in-memory storage");
        serve(MemoryStore::new(), &config).await;
    } else {
        tracing::info!("Using store file {}", config.store_path.display());
        serve(FileStore::new(&config.store_path), &config).await;
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("backdrop=info,backdrop_app=info,backdrop_core=warn")
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run the controller until stdin closes, then flush pending writes.
async fn serve<S: KeyValueStore>(store: S, config: &AppConfig) {
    let (out_tx, out_rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(write_stdout(out_rx));

    let mut controller = ColorController::new(store, config);
    controller.load_saved().await;
    send_messages(&out_tx, vec![controller.snapshot()]);

    let (handle, mut queue) = event_channel();
    let reader = tokio::spawn(read_stdin(handle, out_tx.clone()));

    let flush_tx = out_tx.clone();
    controller
        .run(&mut queue, |messages| send_messages(&flush_tx, messages))
        .await;

    if let Err(e) = reader.await {
        tracing::error!("stdin reader failed: {e}");
    }
    controller.shutdown().await;

    drop(flush_tx);
    drop(out_tx);
    if let Err(e) = writer.await {
        tracing::error!("stdout writer failed: {e}");
    }
}

/// Parse stdin lines and post them onto the controller queue.
async fn read_stdin(handle: PickerHandle, out_tx: mpsc::UnboundedSender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<UiToApp>(&line) {
            Ok(msg) => {
                if let Err(e) = handle.send(msg.into()) {
                    tracing::warn!("Dropping UI message: {e}");
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to parse UI message: {e}");
                send_messages(
                    &out_tx,
                    vec![AppToUi::Error {
                        message: format!("invalid message: {e}"),
                    }],
                );
            }
        }
    }
    tracing::info!("stdin closed");
}

fn send_messages(out_tx: &mpsc::UnboundedSender<String>, messages: Vec<AppToUi>) {
    for msg in messages {
        match serde_json::to_string(&msg) {
            Ok(json) => {
                if out_tx.send(json).is_err() {
                    tracing::warn!("Dropping outbound message: stdout writer has stopped");
                }
            }
            Err(e) => tracing::error!("Failed to serialize AppToUi: {e}"),
        }
    }
}

async fn write_stdout(mut rx: mpsc::UnboundedReceiver<String>) {
    let mut stdout = tokio::io::stdout();
    while let Some(json) = rx.recv().await {
        let line = format!("{json}\n");
        if let Err(e) = stdout.write_all(line.as_bytes()).await {
            tracing::error!("Failed to write to stdout: {e}");
            break;
        }
        if let Err(e) = stdout.flush().await {
            tracing::error!("Failed to flush stdout: {e}");
            break;
        }
    }
}
