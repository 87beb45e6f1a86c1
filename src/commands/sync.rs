use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::utils::tui;

pub async fn run(client: &ApiClient) -> Result<()> {
    let spinner = tui::spinner("Syncing with the external calendar");
    let result = client.sync_calendar().await;
    spinner.finish_and_clear();

    match result {
        Ok(synced) => {
            // Full reload after an import, so the count reflects what the
            // agenda will actually show.
            let events = client.events(&[]).await?;
            println!(
                "{}",
                format!("Synced! {} events imported, {} on the agenda.", synced, events.len())
                    .green()
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!("calendar sync failed: {err}");
            anyhow::bail!("Sync failed: {err}")
        }
    }
}
