use anyhow::Result;
use docket_core::protocol::EventPatch;
use docket_core::state::Dashboard;
use docket_core::{DocketError, EventStatus, User};

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, user: &User, id: i64, status: &str) -> Result<()> {
    if !user.role.can_edit() {
        return Err(DocketError::Permission(format!(
            "a {} cannot change event status",
            user.role.label()
        ))
        .into());
    }

    let status = EventStatus::parse_known(status).ok_or_else(|| {
        let valid: Vec<&str> = EventStatus::ALL.iter().map(|s| s.as_wire()).collect();
        anyhow::anyhow!("Unknown status \"{}\". Valid statuses: {}", status, valid.join(", "))
    })?;

    let spinner = tui::spinner("Loading events");
    let events = client.events(&[]).await;
    spinner.finish_and_clear();

    let mut dash = Dashboard::new(events?, Vec::new());
    if !dash.open(id) {
        anyhow::bail!("Event {id} not found");
    }

    let spinner = tui::spinner("Updating status");
    let result = client.update_event(id, &EventPatch::status(status.clone())).await;
    spinner.finish_and_clear();

    // Server-confirmed patch: prefer the echoed event, fall back to the
    // requested status.
    match result? {
        Some(fresh) => dash.replace_event(fresh),
        None => dash.apply_status(id, status),
    }

    if let Some(event) = dash.selected.as_ref() {
        println!("{}", render::render_detail(event));
    }

    Ok(())
}
