#![forbid(unsafe_code)]
mod common;

use chrono::{Duration, NaiveDate};
use common::date;
use piket::calendar::{easter_sunday, is_monday, monday_near_future};
use piket::scheduler::util::{min_people_required, week_monday, week_seed};
use piket::{HolidayCalendar, NoHolidays, WorkdayCalendar};

#[test]
fn full_week_without_holidays() {
    let days = NoHolidays.workdays(date(2025, 3, 3));
    assert_eq!(days.len(), 5);
    assert_eq!(days.first(), Some(&date(2025, 3, 3)));
    assert_eq!(days.last(), Some(&date(2025, 3, 7)));
}

#[test]
fn fixed_and_file_holidays_are_skipped() {
    let mut calendar = HolidayCalendar::national();
    calendar.add(date(2025, 4, 29), "Cuti bersama");

    let days = calendar.workdays(date(2025, 4, 28));
    assert_eq!(days, vec![date(2025, 4, 28), date(2025, 4, 30), date(2025, 5, 2)]);
    assert_eq!(calendar.name_of(date(2025, 5, 1)), Some("Hari Buruh Internasional"));
    assert_eq!(calendar.name_of(date(2025, 4, 29)), Some("Cuti bersama"));

    assert!(!HolidayCalendar::new().is_holiday(date(2025, 5, 1)));
}

#[test]
fn easter_based_holidays_are_built_in() {
    assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
    assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));

    let calendar = HolidayCalendar::national();
    let holy_week = calendar.workdays(date(2025, 4, 14));
    assert_eq!(holy_week.len(), 4);
    assert!(!holy_week.contains(&date(2025, 4, 18)));
    assert_eq!(calendar.name_of(date(2025, 4, 18)), Some("Wafat Yesus Kristus"));

    let ascension_week = calendar.workdays(date(2025, 5, 26));
    assert!(!ascension_week.contains(&date(2025, 5, 29)));
    assert_eq!(calendar.name_of(date(2024, 5, 9)), Some("Kenaikan Yesus Kristus"));

    assert!(!calendar.is_holiday(date(2025, 4, 20)));
    assert_eq!(HolidayCalendar::new().workdays(date(2025, 4, 14)).len(), 5);
}

#[test]
fn workdays_stop_at_the_end_of_the_date_range() {
    let last_monday = (0..7)
        .filter_map(|back| NaiveDate::MAX.checked_sub_signed(Duration::days(back)))
        .find(|d| is_monday(*d))
        .unwrap();
    let left = (NaiveDate::MAX - last_monday).num_days() as usize + 1;
    let days = NoHolidays.workdays(last_monday);
    assert_eq!(days.len(), left.min(5));
    assert_eq!(days.first(), Some(&last_monday));
}

#[test]
fn nearest_monday() {
    assert!(is_monday(date(2025, 3, 3)));
    assert_eq!(monday_near_future(date(2025, 3, 3)), date(2025, 3, 3));
    assert_eq!(monday_near_future(date(2025, 3, 4)), date(2025, 3, 10));
    assert_eq!(monday_near_future(date(2025, 3, 9)), date(2025, 3, 10));
}

#[test]
fn week_helpers() {
    assert_eq!(min_people_required(5, 3, 2), 8);
    assert_eq!(min_people_required(4, 17, 2), 34);
    assert_eq!(min_people_required(0, 17, 2), 0);
    assert_eq!(week_seed(7, 1), 8);
    assert_eq!(week_seed(u64::MAX, 1), 0);
    assert_eq!(week_monday(date(2025, 3, 3), 1), Some(date(2025, 3, 3)));
    assert_eq!(week_monday(date(2025, 3, 3), 3), Some(date(2025, 3, 17)));
    assert_eq!(week_monday(date(2025, 3, 3), u32::MAX), None);
}
