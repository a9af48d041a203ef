use crate::model::{Assignment, Schedule, WeekResult};
use crate::template::slot_group;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const HARI: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Date au format indonésien : `Senin, 3 Maret 2025`.
pub fn fmt_date_id(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        HARI[date.weekday().num_days_from_monday() as usize],
        date.day(),
        BULAN[date.month0() as usize],
        date.year()
    )
}

/// Numérotation des lignes d'une journée (présentation uniquement).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingMode {
    /// Repart à 1 à chaque groupe.
    #[default]
    PerGroup,
    Continuous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRow<'a> {
    pub no: usize,
    pub group: Option<char>,
    pub assignment: &'a Assignment,
}

/// Regroupe les lignes d'un jour par groupe de slot (ordre de première
/// apparition), en gardant l'ordre des positions dans chaque groupe.
pub fn numbered_day<'a>(rows: &[&'a Assignment], mode: NumberingMode) -> Vec<NumberedRow<'a>> {
    let mut sorted: Vec<&'a Assignment> = rows.to_vec();
    sorted.sort_by_key(|a| a.position);

    let mut groups: Vec<Option<char>> = Vec::new();
    for a in &sorted {
        let g = slot_group(&a.slot);
        if !groups.contains(&g) {
            groups.push(g);
        }
    }

    let mut out = Vec::with_capacity(sorted.len());
    for g in groups {
        let mut no_in_group = 0;
        for &a in sorted.iter().filter(|a| slot_group(&a.slot) == g) {
            no_in_group += 1;
            let no = match mode {
                NumberingMode::PerGroup => no_in_group,
                NumberingMode::Continuous => out.len() + 1,
            };
            out.push(NumberedRow {
                no,
                group: g,
                assignment: a,
            });
        }
    }
    out
}

/// Rendu d'une semaine (texte, markdown…).
pub trait WeekRenderer {
    fn render(&self, week: &WeekResult) -> String;
}

/// Rendu texte brut, un bloc par jour et un sous-bloc par groupe.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextWeekRenderer {
    pub numbering: NumberingMode,
}

impl WeekRenderer for TextWeekRenderer {
    fn render(&self, week: &WeekResult) -> String {
        let mut lines = vec![format!(
            "Minggu {} (mulai {})",
            week.week,
            fmt_date_id(week.monday)
        )];
        if week.workdays.is_empty() {
            lines.push(String::new());
            lines.push("(tidak ada hari kerja)".to_string());
        }
        for &day in &week.workdays {
            lines.push(String::new());
            lines.push(fmt_date_id(day));
            let mut current: Option<Option<char>> = None;
            for row in numbered_day(&week.day(day), self.numbering) {
                if current != Some(row.group) {
                    lines.push(format!("[{}]", row.group.unwrap_or('?')));
                    current = Some(row.group);
                }
                lines.push(format!(
                    "{}. {} | {} | {}",
                    row.no, row.assignment.name, row.assignment.team, row.assignment.slot
                ));
            }
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

pub fn render_schedule(schedule: &Schedule, renderer: &dyn WeekRenderer) -> String {
    schedule
        .weeks
        .iter()
        .map(|w| renderer.render(w))
        .collect::<Vec<_>>()
        .join("\n")
}
