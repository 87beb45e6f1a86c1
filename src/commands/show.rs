use anyhow::Result;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, id: i64) -> Result<()> {
    let spinner = tui::spinner("Loading event");
    let result = client.event(id).await;
    spinner.finish_and_clear();

    println!("{}", render::render_detail(&result?));
    Ok(())
}
