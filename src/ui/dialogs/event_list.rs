//! Full event list dialog for a single day, opened from the "+N more"
//! affordance on an overflowing day cell.

use chrono::NaiveDate;
use egui::RichText;

use crate::models::event::{Event, EventId};
use crate::services::schedule::ScheduleService;
use crate::utils::date::date_key;

pub struct EventListState {
    /// Day whose full event list is shown
    pub date: NaiveDate,
}

/// User intent reported by the list dialog for one frame
#[derive(Debug, Clone)]
pub enum EventListAction {
    None,
    /// Switch to the edit form for this event (the list closes)
    Edit(Event),
    Delete(EventId),
    Close,
}

impl EventListState {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

/// Render the day's full event list. Never mutates the store; the app
/// applies the returned action.
pub fn render_event_list(
    ctx: &egui::Context,
    state: &EventListState,
    schedule: &ScheduleService,
) -> EventListAction {
    let mut action = EventListAction::None;
    let mut open = true;

    let events = schedule.events_for(&date_key(state.date));

    egui::Window::new("Event Listing")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(state.date.format("%B %d, %Y").to_string())
                    .size(14.0)
                    .strong(),
            );
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for event in events {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&event.title).strong());
                            if let Some(description) = &event.description {
                                ui.label(
                                    RichText::new(description).size(11.0).weak(),
                                );
                            }
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                    action = EventListAction::Delete(event.id);
                                }
                                if ui.small_button("✏").on_hover_text("Edit").clicked() {
                                    action = EventListAction::Edit(event.clone());
                                }
                            },
                        );
                    });
                    ui.separator();
                }
            });
        });

    if !open {
        action = EventListAction::Close;
    }
    action
}
