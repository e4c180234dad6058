use chrono::{Datelike, Local, NaiveDate};
use egui::{Margin, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::CalendarAction;
use crate::services::schedule::ScheduleService;
use crate::ui::theme::CalendarTheme;
use crate::utils::date::{days_in_month, first_weekday_of_month};

/// Height of a day cell in the grid
pub(super) const CELL_HEIGHT: f32 = 100.0;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct MonthView;

impl MonthView {
    /// Render the month grid for the month containing `current_date` and
    /// report the user's interaction, if any.
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        schedule: &ScheduleService,
        theme: &CalendarTheme,
    ) -> CalendarAction {
        let today = Local::now().date_naive();
        let mut action = CalendarAction::None;

        let spacing = 2.0;
        let total_spacing = spacing * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        let palette = CalendarCellPalette::from_theme(theme);

        // Day of week headers - use Grid to match column widths below
        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for day in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 30.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(palette.empty_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        // Calculate calendar grid
        let year = current_date.year();
        let month = current_date.month();
        let first_weekday = first_weekday_of_month(year, month) as i32;
        let month_days = days_in_month(year, month) as i32;

        // Total cells needed = leading pad + days in month, rounded up to
        // whole weeks
        let total_cells = first_weekday + month_days;
        let weeks_needed = (total_cells + 6) / 7;

        let mut day_counter = 1 - first_weekday;

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for _week_row in 0..weeks_needed {
                    for _day_of_week in 0..7 {
                        if day_counter < 1 || day_counter > month_days {
                            // Empty cell for days outside current month
                            let (rect, _response) = ui.allocate_exact_size(
                                Vec2::new(col_width, CELL_HEIGHT),
                                egui::Sense::hover(),
                            );
                            ui.painter().rect_filled(rect, 2.0, palette.empty_bg);
                        } else {
                            let date = NaiveDate::from_ymd_opt(year, month, day_counter as u32)
                                .expect("day within month");
                            let summary = schedule.day_summary(date);

                            let cell_action = Self::render_day_cell(
                                ui,
                                day_counter as u32,
                                date,
                                date == today,
                                summary,
                                palette,
                                col_width,
                            );

                            if !matches!(cell_action, CalendarAction::None) {
                                action = cell_action;
                            }
                        }
                        day_counter += 1;
                    }
                    ui.end_row();
                }
            });

        action
    }
}
