use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render::Render;
use crate::session::SessionStore;
use crate::utils::tui;

pub async fn run(client: &ApiClient, sessions: &SessionStore, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("  Email").interact_text()?,
    };

    let email = email.trim();
    if email.is_empty() {
        anyhow::bail!("Email must not be empty");
    }

    let spinner = tui::spinner("Signing in");
    let result = client.login(email).await;
    spinner.finish_and_clear();

    let user = result?;
    sessions.save(&user)?;

    println!("{}", format!("Logged in as {} ({})", user.name, user.role.label()).green());
    Ok(())
}

pub fn logout(sessions: &SessionStore) -> Result<()> {
    sessions.clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(sessions: &SessionStore) -> Result<()> {
    match sessions.load() {
        Some(user) => {
            println!("{}", user.render());
            if !user.email.is_empty() {
                println!("   {}", user.email.dimmed());
            }
        }
        None => println!("{}", "Not logged in. Run `docket login` first".dimmed()),
    }
    Ok(())
}
