use std::sync::Arc;

use anyhow::Result;
use pagetrail::{
    capture::{CaptureOrchestrator, DocumentHost, PageId, PageLoadEvent},
    config::Config,
    extractor::PageDocument,
    interests::InterestStore,
    storage::{FileStorage, KeyValueStore},
    telemetry,
};
use serde::Deserialize;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    signal,
    sync::mpsc,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// One loaded page per stdin line.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSnapshot {
    page_id: PageId,
    url: String,
    html: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    info!(storage = %config.storage_path().display(), "starting capture");

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::new(config.storage_path()));
    let store = Arc::new(InterestStore::new(storage.clone()));
    let host = Arc::new(DocumentHost::new());
    let orchestrator = CaptureOrchestrator::new(store.clone(), storage, host.clone(), &config);
    orchestrator.on_installed().await;

    let (sender, receiver) = mpsc::channel(config.event_buffer());
    let shutdown = CancellationToken::new();

    // Spawn shutdown handler
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, stopping capture");
            shutdown.cancel();
        });
    }

    let runner = {
        let orchestrator = orchestrator.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move { orchestrator.run(receiver, shutdown).await })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let snapshot: PageSnapshot = match serde_json::from_str(&line) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("skipping malformed page line: {}", e);
                continue;
            }
        };

        host.register(
            snapshot.page_id,
            PageDocument::new(snapshot.url.clone(), snapshot.html),
        );
        if sender
            .send(PageLoadEvent::complete(snapshot.page_id, snapshot.url))
            .await
            .is_err()
        {
            break;
        }
    }

    // Closing the channel lets the run loop drain and exit
    drop(sender);
    runner.await?;

    let stats = store.get_interest_stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
