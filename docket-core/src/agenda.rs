//! Agenda view model: filtering, week bucketing and statistics.
//!
//! These are pure functions over the raw event list plus the UI filter
//! state. Day buckets match on the literal `YYYY-MM-DD` string, never on
//! parsed or zone-shifted dates.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::event::{Event, EventStatus, EventType};

/// Type filter for the agenda: everything, or a single event type.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

/// UI filter state applied to the raw event list.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub type_filter: TypeFilter,
    pub search: String,
}

impl EventFilter {
    /// An event passes if its type matches the type filter and its title
    /// or client name contains the search text, case-insensitively.
    /// An empty search matches everything.
    pub fn matches(&self, event: &Event) -> bool {
        let matches_type = match &self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => event.event_type == *t,
        };

        let needle = self.search.to_lowercase();
        let matches_search = event.title.to_lowercase().contains(&needle)
            || event
                .client_name
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));

        matches_type && matches_search
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

/// The 7 visible days of the week containing `anchor`.
///
/// The week starts on Sunday: the anchor minus its Sunday-based weekday
/// index.
pub fn week_days(anchor: NaiveDate) -> [NaiveDate; 7] {
    let start = anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Canonical date string used for bucketing (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The events whose literal date string equals the given day's date string,
/// in arrival order.
pub fn events_on<'a>(events: &[&'a Event], date: NaiveDate) -> Vec<&'a Event> {
    let key = date_key(date);
    events.iter().copied().filter(|e| e.event_date == key).collect()
}

/// Whether `date` is the current local date. Evaluated against the wall
/// clock on every call, never cached.
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

/// Counters derived from the filtered event set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub urgent: usize,
    pub done: usize,
}

impl Stats {
    pub fn of(events: &[&Event]) -> Stats {
        let count = |status: EventStatus| events.iter().filter(|e| e.status == status).count();
        Stats {
            total: events.len(),
            pending: count(EventStatus::Pending),
            urgent: count(EventStatus::Urgent),
            done: count(EventStatus::Done),
        }
    }
}
