use std::sync::Arc;

use anyhow::{Result, bail};
use pagetrail::{config::Config, interests::InterestStore, storage::FileStorage, telemetry};
use serde_json::json;

const DASHBOARD_LIMIT: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let store = InterestStore::new(Arc::new(FileStorage::new(config.storage_path())));

    match std::env::args().nth(1).as_deref() {
        None | Some("show") => {
            let dashboard = json!({
                "stats": store.get_interest_stats().await,
                "recent": store.get_recent_interests(DASHBOARD_LIMIT).await,
                "top": store.get_top_interests(DASHBOARD_LIMIT).await,
            });
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        Some("clear") => {
            store.clear_interests().await;
            println!("interests cleared");
        }
        Some(other) => bail!("unknown command '{}', expected 'show' or 'clear'", other),
    }

    Ok(())
}
