use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Input, Select};
use docket_core::protocol::NewEvent;
use docket_core::state::Dashboard;
use docket_core::{DocketError, EventStatus, EventType, User};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    client: &ApiClient,
    user: &User,
    title: Option<String>,
    event_type: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    client_name: Option<String>,
) -> Result<()> {
    if !user.role.can_create() {
        return Err(DocketError::Permission(format!(
            "a {} cannot create events",
            user.role.label()
        ))
        .into());
    }

    let interactive = title.is_none() || date.is_none() || time.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("  Title").interact_text()?,
    };

    // --- Type ---
    let event_type = match event_type {
        Some(wire) => parse_type(&wire)?,
        None if interactive => {
            let labels: Vec<&str> = EventType::ALL.iter().map(|t| t.label()).collect();
            let selection = Select::new()
                .with_prompt("  Type")
                .items(&labels)
                .default(1) // Reunião
                .interact()?;
            EventType::ALL[selection].clone()
        }
        None => EventType::Meeting,
    };

    // --- Date / Time ---
    let event_date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  Date (YYYY-MM-DD)", parse_date)?,
    };
    let event_time = match time {
        Some(t) => parse_time(&t)?,
        None => prompt_with_retry("  Time (HH:MM)", parse_time)?,
    };

    // --- Location / Client ---
    let location = optional_field(location, interactive, "  Where? (skip)")?;
    let client_name = optional_field(client_name, interactive, "  Client? (skip)")?;

    // --- Status ---
    let status = if interactive {
        let labels: Vec<&str> = EventStatus::ALL.iter().map(|s| s.label()).collect();
        let selection = Select::new()
            .with_prompt("  Status")
            .items(&labels)
            .default(0) // Pendente
            .interact()?;
        EventStatus::ALL[selection].clone()
    } else {
        EventStatus::Pending
    };

    let new_event = NewEvent {
        title,
        event_type,
        event_date,
        event_time,
        status,
        location,
        client_name,
        category: "cliente".to_string(),
        created_by: user.id,
    };
    new_event.validate()?;

    let spinner = tui::spinner("Creating event");
    let created = client.create_event(&new_event).await;
    spinner.finish_and_clear();

    if interactive {
        println!();
    }
    let echoed = created?;

    // Reload and show the week the event landed on. The list endpoint can
    // lag the write, so merge the echoed copy if it is not there yet.
    let events = client.events(&[]).await?;
    let mut dash = Dashboard::new(events, Vec::new());
    match echoed {
        Some(event) => {
            println!("{}", format!("Created: #{} {}", event.id, event.title).green());
            if !dash.events.iter().any(|e| e.id == event.id) {
                dash.insert_event(event);
            }
        }
        None => println!("{}", format!("Created: {}", new_event.title).green()),
    }

    if let Ok(anchor) = NaiveDate::parse_from_str(&new_event.event_date, "%Y-%m-%d") {
        dash.anchor = anchor;
    }
    println!("{}", render::render_week(&dash));

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Optional free-text field: use the flag, or prompt with an empty default.
fn optional_field(
    value: Option<String>,
    interactive: bool,
    prompt: &str,
) -> Result<Option<String>> {
    let value = match value {
        Some(v) => v,
        None if interactive => Input::<String>::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => return Ok(None),
    };

    Ok(if value.is_empty() { None } else { Some(value) })
}

fn parse_type(input: &str) -> Result<EventType> {
    EventType::parse_known(input.trim()).ok_or_else(|| {
        let valid: Vec<&str> = EventType::ALL.iter().map(|t| t.as_wire()).collect();
        anyhow::anyhow!("Unknown event type \"{}\". Valid types: {}", input, valid.join(", "))
    })
}

/// The backend compares dates as literal strings, so normalize to the
/// exact `YYYY-MM-DD` form it buckets on.
fn parse_date(input: &str) -> Result<String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\". Expected YYYY-MM-DD", input))
}

fn parse_time(input: &str) -> Result<String> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\". Expected HH:MM", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_date ---

    #[test]
    fn parse_date_normalizes_valid_input() {
        assert_eq!(parse_date("2026-08-05").unwrap(), "2026-08-05");
        assert_eq!(parse_date(" 2026-08-05 ").unwrap(), "2026-08-05");
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("05/08/2026").is_err());
        assert!(parse_date("2026-8-5-x").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    // --- parse_time ---

    #[test]
    fn parse_time_accepts_hh_mm() {
        assert_eq!(parse_time("14:30").unwrap(), "14:30");
        assert_eq!(parse_time("09:00").unwrap(), "09:00");
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("2pm").is_err());
        assert!(parse_time("25:00").is_err());
    }

    // --- parse_type ---

    #[test]
    fn parse_type_accepts_known_wire_values() {
        assert_eq!(parse_type("audiencia").unwrap(), EventType::Hearing);
        assert_eq!(parse_type("prazo").unwrap(), EventType::Deadline);
    }

    #[test]
    fn parse_type_rejects_unknown_values() {
        assert!(parse_type("mediacao").is_err());
    }
}
