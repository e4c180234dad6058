//! Day cell rendering for the month view.
//!
//! Renders one day: the day number, the event-count badge, up to three
//! inline event bars, and the "+N more" overflow affordance. Reports
//! clicks as [`CalendarAction`]s; never mutates the store.

use chrono::NaiveDate;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, CELL_HEIGHT};
use super::palette::CalendarCellPalette;
use super::CalendarAction;
use crate::models::event::Event;
use crate::services::schedule::DaySummary;
use crate::utils::date::date_key;

/// Width of the per-event delete zone at the right edge of an event bar
const DELETE_ZONE_WIDTH: f32 = 16.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let prefix = &text[..char_boundaries[mid]];
            let candidate = format!("{}{}", prefix, ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        day: u32,
        date: NaiveDate,
        is_today: bool,
        summary: DaySummary<'_>,
        palette: CalendarCellPalette,
        col_width: f32,
    ) -> CalendarAction {
        use chrono::Datelike;

        let desired_size = Vec2::new(col_width, CELL_HEIGHT);
        let (rect, response) =
            ui.allocate_exact_size(desired_size, Sense::click().union(Sense::hover()));

        let weekday = date.weekday().num_days_from_sunday();
        let is_weekend = weekday == 0 || weekday == 6;

        // Background
        let bg_color = if is_today {
            palette.today_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Border
        let border_color = if is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        // Hover emphasis with cursor change
        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // Day number label
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            format!("{}", day),
            egui::FontId::proportional(14.0),
            palette.text,
        );

        // Event-count badge, shown whenever the day has any events
        if summary.has_events() {
            let badge_center = Pos2::new(rect.right() - 11.0, rect.top() + 11.0);
            ui.painter().circle_filled(badge_center, 9.0, palette.badge_bg);
            ui.painter().text(
                badge_center,
                egui::Align2::CENTER_CENTER,
                format!("{}", summary.total),
                egui::FontId::proportional(10.0),
                palette.badge_text,
            );
        }

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));

        // Inline event bars, oldest first
        let mut event_hitboxes: Vec<(Rect, &Event)> = Vec::new();
        let mut y_offset = 24.0;
        for event in summary.inline {
            let event_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, 16.0),
            );
            ui.painter().rect_filled(event_rect, 2.0, palette.event_fill);
            event_hitboxes.push((event_rect, event));

            let font_id = egui::FontId::proportional(11.0);
            let available_width = event_rect.width() - 6.0 - DELETE_ZONE_WIDTH;
            let single_line_title = Self::truncate_single_line_to_width(
                ui,
                &event.title,
                &font_id,
                Color32::WHITE,
                available_width,
            );

            ui.painter().text(
                Pos2::new(event_rect.left() + 3.0, event_rect.center().y),
                egui::Align2::LEFT_CENTER,
                single_line_title,
                font_id,
                Color32::WHITE,
            );

            // Delete zone at the right edge, visible while the bar is hovered
            let bar_hovered = pointer_pos.is_some_and(|pos| event_rect.contains(pos));
            if bar_hovered {
                ui.painter().rect_stroke(
                    event_rect.expand(1.0),
                    3.0,
                    Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
                );
                ui.painter().text(
                    Pos2::new(event_rect.right() - DELETE_ZONE_WIDTH / 2.0, event_rect.center().y),
                    egui::Align2::CENTER_CENTER,
                    "✕",
                    egui::FontId::proportional(10.0),
                    Color32::WHITE,
                );
            }

            y_offset += 18.0;
        }

        // Hover feedback: event tooltip, or a hint on empty space
        let hovered_event = pointer_pos.and_then(|pos| {
            event_hitboxes
                .iter()
                .rev()
                .find(|(hit_rect, _)| hit_rect.contains(pos))
                .map(|(_, event)| *event)
        });

        if let Some(event) = hovered_event {
            if response.hovered() {
                let tooltip = match &event.description {
                    Some(description) => format!("{}\n{}", event.title, description),
                    None => event.title.clone(),
                };
                response.clone().on_hover_ui_at_pointer(|ui| {
                    ui.label(tooltip);
                });
            }
        } else if response.hovered() && !summary.has_overflow() {
            response
                .clone()
                .on_hover_text("Click to add an event on this day");
        }

        // "+N more" overflow affordance
        let mut more_hovered = false;
        if summary.has_overflow() {
            let more_text = format!("+{} more", summary.hidden_count);
            let more_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, 14.0),
            );
            more_hovered = pointer_pos.is_some_and(|pos| more_rect.contains(pos));

            let text_color = if more_hovered {
                palette.text
            } else {
                palette.secondary_text
            };
            ui.painter().text(
                Pos2::new(rect.left() + 5.0, rect.top() + y_offset),
                egui::Align2::LEFT_TOP,
                &more_text,
                egui::FontId::proportional(10.0),
                text_color,
            );

            if more_hovered {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }

        // Click resolution: delete zone, then event bar, then overflow,
        // then the cell itself (opens the add form)
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                for (hit_rect, event) in event_hitboxes.iter().rev() {
                    if !hit_rect.contains(pos) {
                        continue;
                    }
                    let delete_zone = Rect::from_min_max(
                        Pos2::new(hit_rect.right() - DELETE_ZONE_WIDTH, hit_rect.top()),
                        hit_rect.right_bottom(),
                    );
                    if delete_zone.contains(pos) {
                        return CalendarAction::DeleteEvent {
                            key: date_key(date),
                            id: event.id,
                        };
                    }
                    return CalendarAction::EditEvent {
                        date,
                        event: (*event).clone(),
                    };
                }

                if more_hovered {
                    return CalendarAction::ShowDayList(date);
                }
            }
            return CalendarAction::ComposeOn(date);
        }

        CalendarAction::None
    }
}
