//! Terminal rendering for docket types.
//!
//! Extension traits and helpers that turn core types into colored output
//! using owo_colors. The color tables mirror the display metadata of the
//! original dashboard, one arm per variant.

use docket_core::agenda::{self, Stats};
use docket_core::state::Dashboard;
use docket_core::{Event, EventStatus, EventType, Role, User};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text with an event type's display color.
fn colorize_type(event_type: &EventType, text: &str) -> String {
    match event_type {
        EventType::Hearing => text.red().to_string(),
        EventType::Meeting | EventType::Other(_) => text.blue().to_string(),
        EventType::Diligence => text.magenta().to_string(),
        EventType::Deadline => text.yellow().to_string(),
        EventType::Internal => text.green().to_string(),
        EventType::Sales => text.cyan().to_string(),
    }
}

/// Colorize text with a status display color.
fn colorize_status(status: &EventStatus, text: &str) -> String {
    match status {
        EventStatus::Pending | EventStatus::Other(_) => text.yellow().to_string(),
        EventStatus::Confirmed => text.green().to_string(),
        EventStatus::Done => text.dimmed().to_string(),
        EventStatus::Urgent => text.red().to_string(),
        EventStatus::Cancelled => text.bright_black().to_string(),
    }
}

/// Colorize text with a role display color.
fn colorize_role(role: &Role, text: &str) -> String {
    match role {
        Role::Director => text.magenta().to_string(),
        Role::Manager => text.blue().to_string(),
        Role::Sales => text.green().to_string(),
        Role::Marketing => text.yellow().to_string(),
        Role::Lawyer => text.cyan().to_string(),
        Role::Intern | Role::Other(_) => text.bright_magenta().to_string(),
    }
}

impl Render for EventStatus {
    fn render(&self) -> String {
        colorize_status(self, self.label())
    }
}

impl Render for EventType {
    fn render(&self) -> String {
        colorize_type(self, &format!("[{}]", self.label()))
    }
}

/// One agenda line: id, time, title, type tag, client, urgency marker.
impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {:>5} {} {}",
            format!("#{}", self.id).dimmed(),
            self.short_time(),
            self.title,
            self.event_type.render(),
        );
        if let Some(client) = &self.client_name {
            line.push_str(&format!(" · {}", client.dimmed()));
        }
        if self.status == EventStatus::Urgent {
            line.push_str(&format!(" {}", "URGENTE".red().bold()));
        }
        line
    }
}

impl Render for Stats {
    fn render(&self) -> String {
        format!(
            "Total {} · {} {} · {} {} · {} {}",
            self.total.bold(),
            "Pendente".yellow(),
            self.pending,
            "Urgente".red(),
            self.urgent,
            "Concluído".green(),
            self.done,
        )
    }
}

impl Render for User {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            colorize_role(&self.role, &self.avatar_label()),
            self.name.bold(),
            colorize_role(&self.role, &format!("({})", self.role.label())),
        )
    }
}

/// The weekly calendar: stats header plus one section per day.
pub fn render_week(dash: &Dashboard) -> String {
    let mut lines = Vec::new();

    lines.push(dash.stats().render());
    lines.push(String::new());

    for day in dash.week() {
        let mut header = day.format("%a %b %-d").to_string().bold().to_string();
        if agenda::is_today(day) {
            header.push_str(&format!(" {}", "· today".yellow()));
        }
        lines.push(header);

        let bucket = dash.day_bucket(day);
        if bucket.is_empty() {
            lines.push(format!("   {}", "no events".dimmed()));
        } else {
            for event in bucket {
                lines.push(format!("   {}", event.render()));
            }
        }
    }

    lines.join("\n")
}

/// Full event detail: fields, status, assignees, comments.
pub fn render_detail(event: &Event) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} {}", event.event_type.render(), event.title.bold()));
    lines.push(format!(
        "   {} · {}",
        format!("#{}", event.id).dimmed(),
        event.status.render(),
    ));
    lines.push(format!("   Date:     {} {}", event.event_date, event.short_time()));

    if let Some(location) = &event.location {
        lines.push(format!("   Location: {location}"));
    }
    if let Some(client) = &event.client_name {
        lines.push(format!("   Client:   {client}"));
    }

    if !event.assignees.is_empty() {
        let names: Vec<String> = event
            .assignees
            .iter()
            .map(|a| format!("{} ({})", a.name, colorize_role(&a.role, a.role.label())))
            .collect();
        lines.push(format!("   Assignees: {}", names.join(", ")));
    }

    lines.push(format!("   Comments ({}):", event.comments.len()));
    if event.comments.is_empty() {
        lines.push(format!("     {}", "none yet".dimmed()));
    } else {
        for comment in &event.comments {
            let when = comment.created_at.as_deref().unwrap_or("");
            lines.push(format!("     {} {}", comment.author().bold(), when.dimmed()));
            lines.push(format!("       {}", comment.content));
        }
    }

    lines.join("\n")
}

/// The diligence list: one row per task with its status.
pub fn render_task_list(tasks: &[&Event]) -> String {
    if tasks.is_empty() {
        return format!("{}", "No diligences found".dimmed());
    }

    let mut lines = Vec::new();
    for task in tasks {
        let mut line = format!(
            "{} {} {}  {}",
            format!("#{}", task.id).dimmed(),
            task.status.render(),
            task.title,
            task.event_date.dimmed(),
        );
        if let Some(location) = &task.location {
            line.push_str(&format!(" · {}", location.dimmed()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// The team roster with per-member workload counters.
pub fn render_team(dash: &Dashboard) -> String {
    if dash.team.is_empty() {
        return format!("{}", "No team members found".dimmed());
    }

    let mut lines = Vec::new();
    for (i, member) in dash.team.iter().enumerate() {
        let member_events = dash.events_for_member(member.id);
        let pending = member_events.iter().filter(|e| e.status == EventStatus::Pending).count();

        lines.push(member.render());
        lines.push(format!(
            "   events {} · pending {}",
            member_events.len().bold(),
            pending.yellow(),
        ));
        if i < dash.team.len() - 1 {
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

/// A notification feed: events grouped by their date string, arrival order
/// preserved within each group.
pub fn render_feed(events: &[Event]) -> String {
    if events.is_empty() {
        return format!("{}", "No events found".dimmed());
    }

    let mut lines = Vec::new();
    let mut current_date: Option<&str> = None;

    for event in events {
        if current_date != Some(event.event_date.as_str()) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(event.event_date.bold().to_string());
            current_date = Some(event.event_date.as_str());
        }
        lines.push(format!("   {}", event.render()));
    }

    lines.join("\n")
}
