use anyhow::Result;
use docket_core::state::Dashboard;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient) -> Result<()> {
    let spinner = tui::spinner("Loading team");
    let loaded = tokio::try_join!(client.events(&[]), client.team());
    spinner.finish_and_clear();

    let (events, team) = loaded?;
    let dash = Dashboard::new(events, team);

    println!("{}", "Team".bold());
    println!("{}", render::render_team(&dash));

    Ok(())
}
