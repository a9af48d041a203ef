#![forbid(unsafe_code)]
mod common;

use common::date;
use piket::{repair_week, Assignment, Person, Roster, SchedError, WeekResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn people(names: &[&str]) -> Roster {
    Roster::new(names.iter().map(|n| Person::new(*n, format!("T-{n}"))).collect()).unwrap()
}

fn week_with(rows: &[(u32, [&str; 2])]) -> WeekResult {
    let mut week = WeekResult::new(1, date(2025, 3, 3));
    for (day, names) in rows {
        let d = date(2025, 3, *day);
        week.workdays.push(d);
        for (position, name) in names.iter().enumerate() {
            week.assignments.push(Assignment {
                date: d,
                position,
                slot: format!("A{}", position + 1),
                name: name.to_string(),
                team: format!("T-{name}"),
            });
        }
    }
    week
}

#[test]
fn over_cap_row_is_handed_to_a_free_person() {
    let roster = people(&["A", "B", "C", "D"]);
    let mut week = week_with(&[(3, ["A", "B"]), (4, ["A", "C"])]);
    let mut rng = StdRng::seed_from_u64(1);

    let report = repair_week(&mut week, &roster, 1, &mut rng).unwrap();
    assert_eq!(report.replacements, 1);

    // Seul D est libre lundi et sous le cap
    let monday: Vec<(&str, &str)> = week
        .day(date(2025, 3, 3))
        .iter()
        .map(|a| (a.name.as_str(), a.team.as_str()))
        .collect();
    assert_eq!(monday, vec![("D", "T-D"), ("B", "T-B")]);
    let tuesday: Vec<&str> = week.day(date(2025, 3, 4)).iter().map(|a| a.name.as_str()).collect();
    assert_eq!(tuesday, vec!["A", "C"]);
    assert!(week.totals().values().all(|c| *c <= 1));
}

#[test]
fn valid_week_is_left_untouched() {
    let roster = people(&["A", "B", "C"]);
    let mut week = week_with(&[(3, ["A", "B"]), (5, ["C", "A"])]);
    let before = week.clone();
    let mut rng = StdRng::seed_from_u64(2);

    let report = repair_week(&mut week, &roster, 2, &mut rng).unwrap();
    assert_eq!(report.replacements, 0);
    assert_eq!(week, before);
}

#[test]
fn unrepairable_week_is_reported() {
    let roster = people(&["A", "B"]);
    let mut week = week_with(&[(3, ["A", "B"]), (4, ["A", "B"])]);
    let mut rng = StdRng::seed_from_u64(3);

    let err = repair_week(&mut week, &roster, 1, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SchedError::RepairExhausted {
            monday: date(2025, 3, 3),
            people: vec!["A".into(), "B".into()],
        }
    );
}
