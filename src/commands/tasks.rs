use anyhow::Result;
use docket_core::EventType;
use docket_core::state::Dashboard;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, search: Option<String>) -> Result<()> {
    let spinner = tui::spinner("Loading diligences");
    let result = client.events(&[]).await;
    spinner.finish_and_clear();

    let mut dash = Dashboard::new(result?, Vec::new());
    if let Some(search) = search {
        dash.filter.search = search;
    }

    let filtered = dash.filtered();
    let tasks: Vec<_> =
        filtered.into_iter().filter(|e| e.event_type == EventType::Diligence).collect();

    println!("{}", "Diligences".bold());
    println!("{}", render::render_task_list(&tasks));

    Ok(())
}
