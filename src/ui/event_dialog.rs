use chrono::NaiveDate;
use egui::{Color32, RichText};

use crate::models::event::{Event, EventId};
use crate::services::schedule::ScheduleService;

/// State for the add/edit form dialog. The form buffers live here and are
/// discarded when the dialog closes.
pub struct EventDialogState {
    /// Event being edited (None for new event)
    pub event_id: Option<EventId>,
    /// Day the submission targets
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub error_message: Option<String>,
}

/// Outcome of rendering the form for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDialogResult {
    /// Dialog stays open
    Open,
    /// Submission succeeded and the dialog closed
    Saved,
    /// User cancelled or closed the dialog
    Cancelled,
}

impl EventDialogState {
    /// Create a dialog state for adding a new event on `date`. Buffers
    /// start empty; no edit target is set.
    pub fn new_event(date: NaiveDate) -> Self {
        Self {
            event_id: None,
            date,
            title: String::new(),
            description: String::new(),
            error_message: None,
        }
    }

    /// Create a dialog state for editing an existing event: buffers are
    /// loaded from the event and its id becomes the edit target.
    pub fn from_event(date: NaiveDate, event: &Event) -> Self {
        Self {
            event_id: Some(event.id),
            date,
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    /// Submit the form: update the edit target when one is set, otherwise
    /// create a new event on the target day.
    pub fn save(&self, schedule: &mut ScheduleService) -> Result<(), String> {
        match self.event_id {
            Some(id) => schedule
                .update(self.date, id, &self.title, &self.description)
                .map_err(|e| e.to_string()),
            None => schedule
                .create(self.date, &self.title, &self.description)
                .map(|_| ())
                .map_err(|e| e.to_string()),
        }
    }
}

/// Render the event form dialog and apply a successful submission to the
/// store. Validation failures keep the dialog open with an inline error.
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    schedule: &mut ScheduleService,
) -> EventDialogResult {
    let mut result = EventDialogResult::Open;
    let mut open = true;

    egui::Window::new(if state.is_editing() {
        "Edit Event"
    } else {
        "Add New Event"
    })
    .collapsible(false)
    .resizable(false)
    .default_width(360.0)
    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    .open(&mut open)
    .show(ctx, |ui| {
        if let Some(ref error) = state.error_message {
            ui.colored_label(Color32::RED, RichText::new(error).strong());
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            ui.label("Date:");
            ui.label(RichText::new(state.date.format("%B %d, %Y").to_string()).strong());
        });

        ui.add_space(4.0);

        ui.label("Title:");
        ui.text_edit_singleline(&mut state.title);

        ui.add_space(4.0);

        ui.label("Description:");
        ui.text_edit_multiline(&mut state.description);

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let save_label = if state.is_editing() {
                "Update Event"
            } else {
                "Add Event"
            };
            if ui.button(save_label).clicked() {
                match state.save(schedule) {
                    Ok(()) => {
                        result = EventDialogResult::Saved;
                    }
                    Err(e) => {
                        state.error_message = Some(e);
                    }
                }
            }

            if ui.button("Cancel").clicked() {
                result = EventDialogResult::Cancelled;
            }
        });
    });

    if !open && result == EventDialogResult::Open {
        result = EventDialogResult::Cancelled;
    }
    result
}
