// Integration tests simulating full user flows through the store and the
// form dialog state, without a running UI.
use chrono::NaiveDate;
use event_scheduler::services::schedule::ScheduleService;
use event_scheduler::ui::event_dialog::EventDialogState;
use event_scheduler::utils::date::{date_key, shift_month};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn test_add_edit_delete_lifecycle() {
    let mut schedule = ScheduleService::new();
    let target = day(2024, 11, 25);

    // User clicks an empty day and submits the form
    let mut form = EventDialogState::new_event(target);
    form.title = "Dentist".to_string();
    form.description = "remember insurance card".to_string();
    form.save(&mut schedule).expect("submission should succeed");

    let key = date_key(target);
    let events = schedule.events_for(&key);
    assert_eq!(events.len(), 1);
    let id = events[0].id;

    // User clicks the rendered event: buffers load, edit target set
    let mut form = EventDialogState::from_event(target, &events[0]);
    assert_eq!(form.title, "Dentist");
    assert_eq!(form.description, "remember insurance card");

    form.title = "Dentist (moved to 3pm)".to_string();
    form.save(&mut schedule).expect("update should succeed");

    let events = schedule.events_for(&key);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id, "editing must preserve the identifier");
    assert_eq!(events[0].title, "Dentist (moved to 3pm)");

    // User deletes the event; the day key disappears with it
    assert!(schedule.remove(&key, id));
    assert!(schedule.is_empty());
}

#[test]
fn test_empty_title_submission_changes_nothing() {
    let mut schedule = ScheduleService::new();
    let target = day(2024, 11, 25);

    let form = EventDialogState::new_event(target);
    assert!(form.save(&mut schedule).is_err());
    assert!(schedule.is_empty());

    // Same while editing: the stored event keeps its fields
    let id = schedule.create(target, "Keep me", "notes").unwrap();
    let mut form = EventDialogState::from_event(target, &schedule.events_for(&date_key(target))[0]);
    form.title = String::new();
    assert!(form.save(&mut schedule).is_err());

    let events = schedule.events_for(&date_key(target));
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].title, "Keep me");
}

#[test]
fn test_overflow_day_renders_three_inline_plus_two_more() {
    let mut schedule = ScheduleService::new();
    let target = day(2024, 11, 25);

    for title in ["A", "B", "C", "D", "E"] {
        schedule.create(target, title, "").unwrap();
    }

    let summary = schedule.day_summary(target);
    assert_eq!(summary.inline.len(), 3);
    assert_eq!(summary.hidden_count, 2);
    assert_eq!(summary.total, 5);

    // Deleting down to the cap removes the overflow affordance
    let ids: Vec<i64> = schedule
        .events_for(&date_key(target))
        .iter()
        .map(|e| e.id)
        .collect();
    schedule.remove(&date_key(target), ids[3]);
    schedule.remove(&date_key(target), ids[4]);

    let summary = schedule.day_summary(target);
    assert_eq!(summary.total, 3);
    assert!(!summary.has_overflow());
}

#[test]
fn test_month_paging_never_touches_events() {
    let mut schedule = ScheduleService::new();
    let target = day(2024, 1, 31);
    schedule.create(target, "Payday", "").unwrap();

    let mut displayed = target;
    for _ in 0..12 {
        displayed = shift_month(displayed, 1);
    }
    assert_eq!(displayed, day(2025, 1, 31));

    displayed = shift_month(day(2025, 1, 15), -1);
    assert_eq!(displayed, day(2024, 12, 15));

    assert_eq!(schedule.total_events(), 1);
    assert_eq!(schedule.events_for("2024-1-31").len(), 1);
}

#[test]
fn test_events_on_same_calendar_day_in_different_years_do_not_collide() {
    let mut schedule = ScheduleService::new();
    schedule.create(day(2024, 3, 9), "This year", "").unwrap();
    schedule.create(day(2025, 3, 9), "Next year", "").unwrap();

    assert_eq!(schedule.events_for("2024-3-9").len(), 1);
    assert_eq!(schedule.events_for("2025-3-9").len(), 1);
}

#[test]
fn test_listing_day_drains_to_empty() {
    let mut schedule = ScheduleService::new();
    let target = day(2024, 6, 1);
    for title in ["A", "B", "C", "D"] {
        schedule.create(target, title, "").unwrap();
    }

    let key = date_key(target);
    let ids: Vec<i64> = schedule.events_for(&key).iter().map(|e| e.id).collect();
    for id in ids {
        assert!(schedule.remove(&key, id));
    }

    assert!(schedule.events_for(&key).is_empty());
    assert!(schedule.is_empty());

    // Stale deletes after the drain stay silent
    assert!(!schedule.remove(&key, 1));
}
