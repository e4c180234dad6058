//! In-memory schedule store.
//! Maps canonical day keys to insertion-ordered event lists and computes
//! the per-day render payload for the month grid.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::event::{Event, EventError, EventId};
use crate::utils::date::{date_key, parse_date_key};

/// Maximum number of events rendered inline in a day cell before the
/// remainder collapses into the "+N more" affordance.
pub const INLINE_EVENT_CAP: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Invalid(#[from] EventError),
    #[error("No event with id {id} on {key}")]
    EventNotFound { key: String, id: EventId },
}

/// Render payload for one day cell: total count for the badge, the
/// oldest-first inline slice, and how many events the overflow affordance
/// stands in for.
#[derive(Debug, Clone, Copy)]
pub struct DaySummary<'a> {
    pub total: usize,
    pub inline: &'a [Event],
    pub hidden_count: usize,
}

impl DaySummary<'_> {
    pub fn has_events(&self) -> bool {
        self.total > 0
    }

    pub fn has_overflow(&self) -> bool {
        self.hidden_count > 0
    }
}

/// Service owning all scheduled events for the lifetime of the widget.
///
/// Invariant: a day key is present in the map iff its event list is
/// non-empty. Ids are allocated from a counter and never reused within a
/// session.
pub struct ScheduleService {
    events: HashMap<String, Vec<Event>>,
    next_id: EventId,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a new event on `date`, appended to the end of that day's
    /// list. Returns the allocated id.
    pub fn create(
        &mut self,
        date: NaiveDate,
        title: &str,
        description: &str,
    ) -> Result<EventId, ScheduleError> {
        let id = self.next_id;
        let event = Event::new(id, title, description)?;
        self.next_id += 1;

        let key = date_key(date);
        log::debug!("create event {} on {}", id, key);
        self.events.entry(key).or_default().push(event);
        Ok(id)
    }

    /// Replace title/description of the event with `id` on `date`,
    /// preserving its id and position in the day's list.
    pub fn update(
        &mut self,
        date: NaiveDate,
        id: EventId,
        title: &str,
        description: &str,
    ) -> Result<(), ScheduleError> {
        let key = date_key(date);
        let event = self
            .events
            .get_mut(&key)
            .and_then(|day| day.iter_mut().find(|e| e.id == id))
            .ok_or_else(|| ScheduleError::EventNotFound {
                key: key.clone(),
                id,
            })?;

        event.apply(title, description)?;
        log::debug!("update event {} on {}", id, key);
        Ok(())
    }

    /// Delete the event with `id` under `key`. Removes the day key
    /// entirely when its list becomes empty. Tolerant of stale references:
    /// returns `false` when the key or id does not exist.
    pub fn remove(&mut self, key: &str, id: EventId) -> bool {
        let Some(day) = self.events.get_mut(key) else {
            log::warn!("remove ignored: no events on {}", key);
            return false;
        };

        let before = day.len();
        day.retain(|e| e.id != id);
        let removed = day.len() < before;

        if !removed {
            log::warn!("remove ignored: no event {} on {}", id, key);
        } else {
            log::debug!("remove event {} on {}", id, key);
        }

        if day.is_empty() {
            self.events.remove(key);
        }
        removed
    }

    /// Events for one day key, oldest first. Empty slice when the day has
    /// none.
    pub fn events_for(&self, key: &str) -> &[Event] {
        self.events.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Render payload for the day cell of `date`.
    pub fn day_summary(&self, date: NaiveDate) -> DaySummary<'_> {
        let events = self.events_for(&date_key(date));
        DaySummary {
            total: events.len(),
            inline: &events[..events.len().min(INLINE_EVENT_CAP)],
            hidden_count: events.len().saturating_sub(INLINE_EVENT_CAP),
        }
    }

    /// All non-empty days in chronological order, for the events panel.
    pub fn sorted_days(&self) -> Vec<(NaiveDate, &[Event])> {
        let mut days: Vec<(NaiveDate, &[Event])> = self
            .events
            .iter()
            .filter_map(|(key, events)| {
                parse_date_key(key).map(|date| (date, events.as_slice()))
            })
            .collect();
        days.sort_by_key(|(date, _)| *date);
        days
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn total_events(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new()
    }
}
