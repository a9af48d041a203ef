#![allow(dead_code)]
use chrono::NaiveDate;
use piket::{Person, Roster, ScheduleConfig, SlotTemplate, WeekResult};
use std::collections::HashSet;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Lundi sans jour férié fixe.
pub fn monday() -> NaiveDate {
    date(2025, 3, 3)
}

pub fn roster(n: usize) -> Roster {
    let people = (1..=n)
        .map(|i| {
            let team = if i % 2 == 0 { "LABEL" } else { "ORDER" };
            Person::new(format!("P{i:02}"), team)
        })
        .collect();
    Roster::new(people).unwrap()
}

/// Libellés `A1..A5`, `B1..B5`, …
pub fn template(n: usize) -> SlotTemplate {
    let slots = (0..n)
        .map(|i| format!("{}{}", (b'A' + (i / 5) as u8) as char, i % 5 + 1))
        .collect();
    SlotTemplate::new("test", slots).unwrap()
}

pub fn config(weeks: u32, people_per_day: u32, weekly_cap: u32, seed: Option<u64>) -> ScheduleConfig {
    ScheduleConfig {
        weeks,
        people_per_day,
        weekly_cap,
        forbid_consecutive_days: true,
        start_monday: monday(),
        seed,
    }
}

pub fn assert_week_invariants(week: &WeekResult, template: &SlotTemplate, weekly_cap: u32) {
    for (name, count) in week.totals() {
        assert!(count <= weekly_cap, "{name} has {count} > {weekly_cap}");
    }
    for &day in &week.workdays {
        let rows = week.day(day);
        assert_eq!(rows.len(), template.len(), "headcount on {day}");
        let names: HashSet<&str> = rows.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), rows.len(), "duplicate person on {day}");
        let labels: Vec<&str> = rows.iter().map(|a| a.slot.as_str()).collect();
        let expected: Vec<&str> = template.slots.iter().map(String::as_str).collect();
        assert_eq!(labels, expected, "slot order on {day}");
    }
}
