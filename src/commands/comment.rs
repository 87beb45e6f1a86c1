use anyhow::Result;
use docket_core::state::Dashboard;
use docket_core::{DocketError, User};

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, user: &User, id: i64, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DocketError::Validation("comment text must not be empty".into()).into());
    }

    let spinner = tui::spinner("Loading events");
    let events = client.events(&[]).await;
    spinner.finish_and_clear();

    let mut dash = Dashboard::new(events?, Vec::new());
    if !dash.open(id) {
        anyhow::bail!("Event {id} not found");
    }

    let spinner = tui::spinner("Sending comment");
    let result = client.add_comment(id, user.id, text).await;
    spinner.finish_and_clear();
    result?;

    // The comments endpoint does not return the event, so re-fetch it and
    // replace both stored copies with the fresh one.
    let fresh = client.event(id).await?;
    dash.replace_event(fresh);

    if let Some(event) = dash.selected.as_ref() {
        println!("{}", render::render_detail(event));
    }

    Ok(())
}
