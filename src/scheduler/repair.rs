use super::SchedError;
use crate::model::{Person, Roster, WeekResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Bilan d'un passage de réparation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub replacements: usize,
}

/// Ramène chaque personne sous le cap hebdomadaire en réattribuant ses
/// lignes en trop à des personnes libres ce jour-là et encore sous le cap.
///
/// Les totaux sont relus dans `week` (pas dans le tracker). Si une
/// violation subsiste à la fin, la semaine est rejetée.
pub fn repair_week<R: Rng + ?Sized>(
    week: &mut WeekResult,
    roster: &Roster,
    cap: u32,
    rng: &mut R,
) -> Result<RepairReport, SchedError> {
    let mut totals: BTreeMap<String, u32> =
        roster.people().iter().map(|p| (p.name.clone(), 0)).collect();
    for (name, count) in week.totals() {
        totals.insert(name, count);
    }

    let violators: Vec<String> = totals
        .iter()
        .filter(|(_, count)| **count > cap)
        .map(|(name, _)| name.clone())
        .collect();

    let mut report = RepairReport::default();
    for name in violators {
        let rows: Vec<usize> = week
            .assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.name == name)
            .map(|(idx, _)| idx)
            .collect();

        for idx in rows {
            if totals.get(&name).copied().unwrap_or(0) <= cap {
                break;
            }
            let day = week.assignments[idx].date;
            let candidates: Vec<&Person> = roster
                .people()
                .iter()
                .filter(|p| {
                    let busy = week
                        .assignments
                        .iter()
                        .any(|a| a.date == day && a.name == p.name);
                    !busy && totals.get(&p.name).copied().unwrap_or(0) < cap
                })
                .collect();
            let Some(replacement) = candidates.choose(rng) else {
                continue;
            };

            debug!(%day, from = %name, to = %replacement.name, "repair replacement");
            let row = &mut week.assignments[idx];
            row.name = replacement.name.clone();
            row.team = replacement.team.clone();
            *totals.entry(replacement.name.clone()).or_insert(0) += 1;
            if let Some(count) = totals.get_mut(&name) {
                *count -= 1;
            }
            report.replacements += 1;
        }
    }

    let remaining: Vec<String> = week
        .totals()
        .into_iter()
        .filter(|(_, count)| *count > cap)
        .map(|(name, _)| name)
        .collect();
    if !remaining.is_empty() {
        error!(monday = %week.monday, people = ?remaining, "weekly cap still exceeded after repair");
        return Err(SchedError::RepairExhausted {
            monday: week.monday,
            people: remaining,
        });
    }

    Ok(report)
}
