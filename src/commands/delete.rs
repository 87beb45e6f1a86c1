use anyhow::Result;
use dialoguer::Confirm;
use docket_core::state::Dashboard;
use docket_core::{DocketError, User};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, user: &User, id: i64, yes: bool) -> Result<()> {
    if !user.role.can_edit() {
        return Err(DocketError::Permission(format!(
            "a {} cannot delete events",
            user.role.label()
        ))
        .into());
    }

    let spinner = tui::spinner("Loading events");
    let events = client.events(&[]).await;
    spinner.finish_and_clear();

    let mut dash = Dashboard::new(events?, Vec::new());
    if !dash.open(id) {
        anyhow::bail!("Event {id} not found");
    }

    if let Some(event) = dash.selected.as_ref() {
        println!("{}", render::render_detail(event));
        println!();
    }

    if !yes {
        let confirmed =
            Confirm::new().with_prompt("  Delete this event?").default(false).interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let spinner = tui::spinner("Deleting event");
    let result = client.delete_event(id).await;
    spinner.finish_and_clear();
    result?;

    dash.remove_event(id);
    println!(
        "{} {}",
        format!("Deleted event #{id}.").green(),
        format!("{} events remain on the agenda", dash.events.len()).dimmed(),
    );

    Ok(())
}
