use crate::model::Schedule;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonTotal {
    pub name: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyRow {
    pub name: String,
    /// Un compteur par semaine, aligné sur `WeeklyMatrix::weeks`.
    pub counts: Vec<u32>,
}

/// Pivot personne × semaine ; 0 quand la personne n'a rien eu cette semaine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMatrix {
    pub weeks: Vec<u32>,
    pub rows: Vec<WeeklyRow>,
}

impl WeeklyMatrix {
    pub fn count(&self, name: &str, week: u32) -> u32 {
        let Some(col) = self.weeks.iter().position(|w| *w == week) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|r| r.name == name)
            .map_or(0, |r| r.counts[col])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Trié par total décroissant puis nom croissant.
    pub totals: Vec<PersonTotal>,
    pub per_week: WeeklyMatrix,
}

/// Réduction pure du planning ; ne touche pas aux semaines.
pub fn summarize(schedule: &Schedule) -> Summary {
    let weeks: Vec<u32> = schedule.weeks.iter().map(|w| w.week).collect();

    let mut by_person: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for (col, week) in schedule.weeks.iter().enumerate() {
        for a in &week.assignments {
            let counts = by_person
                .entry(a.name.as_str())
                .or_insert_with(|| vec![0; weeks.len()]);
            counts[col] += 1;
        }
    }

    let mut totals: Vec<PersonTotal> = by_person
        .iter()
        .map(|(name, counts)| PersonTotal {
            name: name.to_string(),
            total: counts.iter().sum(),
        })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));

    let rows = by_person
        .into_iter()
        .map(|(name, counts)| WeeklyRow {
            name: name.to_string(),
            counts,
        })
        .collect();

    Summary {
        totals,
        per_week: WeeklyMatrix { weeks, rows },
    }
}
