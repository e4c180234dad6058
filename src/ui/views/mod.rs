use chrono::NaiveDate;

use crate::models::event::{Event, EventId};

pub mod month_day_cell;
pub mod month_view;
mod palette;

/// User intent reported by the month grid and the events panel. The app
/// applies these to the store and the dialog state; views never mutate
/// either directly.
#[derive(Clone, Debug)]
pub enum CalendarAction {
    /// No interaction this frame
    None,
    /// Open the add form targeting a day
    ComposeOn(NaiveDate),
    /// Open the edit form pre-filled from an existing event
    EditEvent { date: NaiveDate, event: Event },
    /// Delete one event, addressed by day key and id
    DeleteEvent { key: String, id: EventId },
    /// Open the full event list for a day (the "+N more" affordance)
    ShowDayList(NaiveDate),
}
