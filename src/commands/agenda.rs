use anyhow::{Context, Result};
use chrono::NaiveDate;
use docket_core::agenda::TypeFilter;
use docket_core::state::Dashboard;
use docket_core::{EventType, User};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(
    client: &ApiClient,
    user: &User,
    date: Option<String>,
    event_type: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let spinner = tui::spinner("Loading agenda");
    let loaded = tokio::try_join!(client.events(&[]), client.team());
    spinner.finish_and_clear();

    let (events, team) = loaded?;
    let mut dash = Dashboard::new(events, team);

    if let Some(date) = date {
        dash.anchor = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{date}'. Expected YYYY-MM-DD"))?;
    }
    if let Some(wire) = event_type {
        dash.filter.type_filter = TypeFilter::Only(EventType::from_wire(wire));
    }
    if let Some(search) = search {
        dash.filter.search = search;
    }

    println!("{} {}", "Agenda".bold(), format!("· {}", user.name).dimmed());
    println!("{}", render::render_week(&dash));

    Ok(())
}
