//! In-memory dashboard state and mutation reconciliation.
//!
//! `Dashboard` holds what the original single-page view held: the loaded
//! event list, the team roster, the filter state, the week anchor and the
//! event currently open in the detail view. Mutations are reconciled by
//! server-confirmed patch: callers perform the remote call first, then
//! apply exactly one of the patch methods below with the confirmed data.

use chrono::{Duration, Local, NaiveDate};

use crate::agenda::{self, EventFilter, Stats};
use crate::event::{Event, EventStatus};
use crate::user::User;

pub struct Dashboard {
    pub events: Vec<Event>,
    pub team: Vec<User>,
    pub filter: EventFilter,
    /// Any date inside the visible week.
    pub anchor: NaiveDate,
    /// Event open in the detail view, if any. A copy, patched alongside
    /// the list entry.
    pub selected: Option<Event>,
}

impl Dashboard {
    pub fn new(events: Vec<Event>, team: Vec<User>) -> Self {
        Dashboard {
            events,
            team,
            filter: EventFilter::default(),
            anchor: Local::now().date_naive(),
            selected: None,
        }
    }

    // --- derived views ---

    pub fn filtered(&self) -> Vec<&Event> {
        self.filter.apply(&self.events)
    }

    pub fn week(&self) -> [NaiveDate; 7] {
        agenda::week_days(self.anchor)
    }

    pub fn day_bucket(&self, date: NaiveDate) -> Vec<&Event> {
        agenda::events_on(&self.filtered(), date)
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.filtered())
    }

    /// Events assigned to a team member, matching assignees on id.
    pub fn events_for_member(&self, member_id: i64) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.assignees.iter().any(|a| a.id == member_id))
            .collect()
    }

    // --- navigation ---

    pub fn next_week(&mut self) {
        self.anchor += Duration::days(7);
    }

    pub fn prev_week(&mut self) {
        self.anchor -= Duration::days(7);
    }

    pub fn go_to_today(&mut self) {
        self.anchor = Local::now().date_naive();
    }

    // --- detail view ---

    /// Open the detail view on an event from the list. Returns false when
    /// the id is not loaded.
    pub fn open(&mut self, id: i64) -> bool {
        match self.events.iter().find(|e| e.id == id) {
            Some(event) => {
                self.selected = Some(event.clone());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    // --- mutation reconciliation ---

    /// Reconcile a confirmed status change: patch the matching list entry
    /// and the open detail, if it is the same event.
    pub fn apply_status(&mut self, id: i64, status: EventStatus) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.status = status.clone();
        }
        if let Some(selected) = self.selected.as_mut() {
            if selected.id == id {
                selected.status = status;
            }
        }
    }

    /// Replace the stored copies of an event with a fresh server copy
    /// (used after a comment append or when a mutation echoes the entity).
    pub fn replace_event(&mut self, fresh: Event) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == fresh.id) {
            *event = fresh.clone();
        }
        if let Some(selected) = self.selected.as_mut() {
            if selected.id == fresh.id {
                *selected = fresh;
            }
        }
    }

    /// Merge a newly created event into the list.
    pub fn insert_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove a deleted event; closes the detail view if it was open on it.
    pub fn remove_event(&mut self, id: i64) {
        self.events.retain(|e| e.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }
}
