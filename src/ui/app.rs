use chrono::{Local, NaiveDate};

use crate::services::schedule::ScheduleService;
use crate::ui::dialogs::event_list::{render_event_list, EventListAction, EventListState};
use crate::ui::event_dialog::{render_event_dialog, EventDialogResult, EventDialogState};
use crate::ui::events_panel::render_events_panel;
use crate::ui::theme::CalendarTheme;
use crate::ui::views::month_view::MonthView;
use crate::ui::views::CalendarAction;
use crate::utils::date::{date_key, shift_month};

/// UI mode. At most one dialog is open at a time: opening the form from
/// inside the list dialog replaces it.
enum ActiveDialog {
    /// Browsing: grid visible, no dialog
    None,
    /// Composing: add/edit form open
    Compose(EventDialogState),
    /// Listing: one day's full event list open
    List(EventListState),
}

pub struct SchedulerApp {
    schedule: ScheduleService,
    /// A day within the displayed month; replaced wholesale on paging
    current_date: NaiveDate,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    dialog: ActiveDialog,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);

        let panel_action = egui::SidePanel::right("events_panel")
            .default_width(230.0)
            .show(ctx, |ui| render_events_panel(ui, &self.schedule))
            .inner;
        self.apply_action(panel_action);

        let grid_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                MonthView::show(ui, self.current_date, &self.schedule, &self.active_theme)
            })
            .inner;
        self.apply_action(grid_action);

        self.render_active_dialog(ctx);
    }
}

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let active_theme = CalendarTheme::from_system();
        active_theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Starting scheduler with {} theme",
            if active_theme.is_dark { "dark" } else { "light" }
        );

        Self {
            schedule: ScheduleService::new(),
            current_date: Local::now().date_naive(),
            active_theme,
            dialog: ActiveDialog::None,
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(self.current_date.format("%B %Y").to_string());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("▶").clicked() {
                        self.change_month(1);
                    }
                    if ui.button("Today").clicked() {
                        self.jump_to_today();
                    }
                    if ui.button("◀").clicked() {
                        self.change_month(-1);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Move the displayed month by `delta`. Stored events are untouched.
    fn change_month(&mut self, delta: i32) {
        self.current_date = shift_month(self.current_date, delta);
        log::debug!("displaying {}", self.current_date.format("%B %Y"));
    }

    fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    fn apply_action(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::None => {}
            CalendarAction::ComposeOn(date) => {
                self.dialog = ActiveDialog::Compose(EventDialogState::new_event(date));
            }
            CalendarAction::EditEvent { date, event } => {
                self.dialog = ActiveDialog::Compose(EventDialogState::from_event(date, &event));
            }
            CalendarAction::DeleteEvent { key, id } => {
                self.schedule.remove(&key, id);
            }
            CalendarAction::ShowDayList(date) => {
                self.dialog = ActiveDialog::List(EventListState::new(date));
            }
        }
    }

    fn render_active_dialog(&mut self, ctx: &egui::Context) {
        match &mut self.dialog {
            ActiveDialog::None => {}
            ActiveDialog::Compose(state) => {
                let result = render_event_dialog(ctx, state, &mut self.schedule);
                if result != EventDialogResult::Open {
                    self.dialog = ActiveDialog::None;
                }
            }
            ActiveDialog::List(state) => {
                let date = state.date;
                let action = render_event_list(ctx, state, &self.schedule);
                match action {
                    EventListAction::None => {}
                    EventListAction::Edit(event) => {
                        // Listing is force-closed when the form opens
                        self.dialog =
                            ActiveDialog::Compose(EventDialogState::from_event(date, &event));
                    }
                    EventListAction::Delete(id) => {
                        self.schedule.remove(&date_key(date), id);
                        if self.schedule.events_for(&date_key(date)).is_empty() {
                            self.dialog = ActiveDialog::None;
                        }
                    }
                    EventListAction::Close => {
                        self.dialog = ActiveDialog::None;
                    }
                }
            }
        }
    }
}
