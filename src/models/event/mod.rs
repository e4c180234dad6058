// Event module
// Short text event attached to a single calendar day.

use thiserror::Error;

/// Identifier for an event. Allocated by the schedule service from a
/// monotonically increasing counter, so ids are unique across the whole
/// store for the lifetime of the session.
pub type EventId = i64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
}

/// A scheduled event. Owned by exactly one calendar day; the id never
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
}

impl Event {
    /// Create a new event with a validated title. An empty or
    /// whitespace-only description is stored as `None`.
    ///
    /// # Examples
    /// ```
    /// use event_scheduler::models::event::Event;
    ///
    /// let event = Event::new(1, "Team Meeting", "weekly sync").unwrap();
    /// assert_eq!(event.description.as_deref(), Some("weekly sync"));
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, EventError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: normalize_description(description.into()),
        })
    }

    /// Replace title and description in place, keeping the id. Used when
    /// editing an existing event.
    pub fn apply(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), EventError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        self.title = title;
        self.description = normalize_description(description.into());
        Ok(())
    }
}

fn normalize_description(description: String) -> Option<String> {
    if description.trim().is_empty() {
        None
    } else {
        Some(description)
    }
}
