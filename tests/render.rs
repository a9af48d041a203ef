#![forbid(unsafe_code)]
mod common;

use common::date;
use piket::render::numbered_day;
use piket::{fmt_date_id, Assignment, NumberingMode, TextWeekRenderer, WeekRenderer, WeekResult};

fn row(position: usize, slot: &str, name: &str, team: &str) -> Assignment {
    Assignment {
        date: date(2025, 3, 3),
        position,
        slot: slot.into(),
        name: name.into(),
        team: team.into(),
    }
}

fn sample_week() -> WeekResult {
    let mut week = WeekResult::new(1, date(2025, 3, 3));
    week.workdays = vec![date(2025, 3, 3)];
    week.assignments = vec![
        row(0, "A1", "Ani", "LABEL"),
        row(1, "A2", "Budi", "ORDER"),
        row(2, "B 9,11", "Citra", "LABEL"),
    ];
    week
}

#[test]
fn indonesian_dates() {
    assert_eq!(fmt_date_id(date(2025, 3, 3)), "Senin, 3 Maret 2025");
    assert_eq!(fmt_date_id(date(2025, 8, 17)), "Minggu, 17 Agustus 2025");
}

#[test]
fn text_week_per_group_numbering() {
    let out = TextWeekRenderer::default().render(&sample_week());
    insta::assert_snapshot!(out.trim_end(), @r"
    Minggu 1 (mulai Senin, 3 Maret 2025)

    Senin, 3 Maret 2025
    [A]
    1. Ani | LABEL | A1
    2. Budi | ORDER | A2
    [B]
    1. Citra | LABEL | B 9,11
    ");
}

#[test]
fn continuous_numbering_runs_across_groups() {
    let week = sample_week();
    let rows = numbered_day(&week.day(date(2025, 3, 3)), NumberingMode::Continuous);
    let numbers: Vec<usize> = rows.iter().map(|r| r.no).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn groups_keep_first_appearance_order() {
    let rows = vec![
        row(0, "B1", "Ani", "X"),
        row(1, "A1", "Budi", "X"),
        row(2, "B2", "Citra", "X"),
    ];
    let refs: Vec<&Assignment> = rows.iter().collect();
    let numbered = numbered_day(&refs, NumberingMode::PerGroup);
    let seen: Vec<(Option<char>, usize, &str)> = numbered
        .iter()
        .map(|r| (r.group, r.no, r.assignment.name.as_str()))
        .collect();
    assert_eq!(
        seen,
        vec![(Some('B'), 1, "Ani"), (Some('B'), 2, "Citra"), (Some('A'), 1, "Budi")]
    );
}

#[test]
fn empty_week_is_rendered() {
    let week = WeekResult::new(2, date(2025, 3, 10));
    let out = TextWeekRenderer::default().render(&week);
    assert!(out.contains("Minggu 2 (mulai Senin, 10 Maret 2025)"));
    assert!(out.contains("(tidak ada hari kerja)"));
}
