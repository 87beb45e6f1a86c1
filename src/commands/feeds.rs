use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn today(client: &ApiClient) -> Result<()> {
    let spinner = tui::spinner("Loading today's events");
    let result = client.today_feed().await;
    spinner.finish_and_clear();

    println!("{}", "Today".bold());
    println!("{}", render::render_feed(&result?));
    Ok(())
}

pub async fn week(client: &ApiClient) -> Result<()> {
    let spinner = tui::spinner("Loading this week's events");
    let result = client.week_feed().await;
    spinner.finish_and_clear();

    println!("{}", "This week".bold());
    println!("{}", render::render_feed(&result?));
    Ok(())
}
