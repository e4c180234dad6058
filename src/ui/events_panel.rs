//! Side panel listing every stored event grouped by day, with edit and
//! delete controls mirroring the ones in the grid.

use egui::RichText;

use crate::services::schedule::ScheduleService;
use crate::ui::views::CalendarAction;
use crate::utils::date::date_key;

pub fn render_events_panel(ui: &mut egui::Ui, schedule: &ScheduleService) -> CalendarAction {
    let mut action = CalendarAction::None;

    ui.heading("Events");
    ui.separator();

    if schedule.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No Events").weak());
        });
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (date, events) in schedule.sorted_days() {
            ui.add_space(4.0);
            ui.label(
                RichText::new(date.format("%B %d, %Y").to_string())
                    .size(13.0)
                    .strong(),
            );

            for event in events {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(&event.title);
                        if let Some(description) = &event.description {
                            ui.label(RichText::new(description).size(11.0).weak());
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            action = CalendarAction::DeleteEvent {
                                key: date_key(date),
                                id: event.id,
                            };
                        }
                        if ui.small_button("✏").on_hover_text("Edit").clicked() {
                            action = CalendarAction::EditEvent {
                                date,
                                event: event.clone(),
                            };
                        }
                    });
                });
            }
            ui.separator();
        }
    });

    action
}
