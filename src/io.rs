use crate::model::{Person, Roster, Schedule};
use crate::render::{numbered_day, NumberingMode};
use crate::scheduler::ValidationError;
use crate::summary::{summarize, Summary};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{Position, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Import du roster depuis un CSV : colonnes `Nama` et `Team` (casse libre),
/// séparateur `,`, `;` ou tabulation détecté sur l'en-tête.
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_roster(&data).with_context(|| format!("invalid roster {}", path.display()))
}

pub fn parse_roster(data: &str) -> Result<Roster> {
    let data = data.trim_start_matches('\u{feff}');
    let delimiter = sniff_delimiter(data.lines().next().unwrap_or_default());
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let headers = rdr.headers()?.clone();
    let name_col = find_column(&headers, "nama").ok_or(ValidationError::MissingColumn("Nama"))?;
    let team_col = find_column(&headers, "team").ok_or(ValidationError::MissingColumn("Team"))?;

    let mut people = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(name_col).unwrap_or_default();
        let team = rec.get(team_col).unwrap_or_default();
        if name.is_empty() && team.is_empty() {
            continue;
        }
        if name.is_empty() {
            let line = rec.position().map_or(0, |pos| record_line(data, pos));
            return Err(ValidationError::EmptyName(line).into());
        }
        people.push(Person::new(name, team));
    }
    Ok(Roster::new(people)?)
}

/// Ligne réelle d'un enregistrement : la position csv précède les lignes
/// vides sautées avant lui.
fn record_line(data: &str, pos: &Position) -> usize {
    let skipped = data
        .as_bytes()
        .get(pos.byte() as usize..)
        .unwrap_or_default()
        .iter()
        .copied()
        .take_while(|b| matches!(b, b'\n' | b'\r'))
        .filter(|b| *b == b'\n')
        .count();
    pos.line() as usize + skipped
}

/// Séparateur le plus fréquent de la ligne d'en-tête (virgule par défaut).
pub fn sniff_delimiter(header: &str) -> u8 {
    [b',', b';', b'\t']
        .into_iter()
        .map(|d| (d, header.bytes().filter(|b| *b == d).count()))
        .fold((b',', 0), |best, cur| if cur.1 > best.1 { cur } else { best })
        .0
}

fn find_column(headers: &StringRecord, wanted: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
}

/// Import des jours fériés : header `date,name` (date `YYYY-MM-DD`).
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> Result<Vec<(NaiveDate, String)>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?;
        if raw.is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid holiday date: {raw}"))?;
        let name = rec.get(1).unwrap_or_default().to_string();
        out.push((date, name));
    }
    Ok(out)
}

/// CSV des assignations : header `week,date,no,name,team,slot`.
pub fn assignments_csv(schedule: &Schedule, numbering: NumberingMode) -> Result<Vec<u8>> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["week", "date", "no", "name", "team", "slot"])?;
    let mut week_buf = itoa::Buffer::new();
    let mut no_buf = itoa::Buffer::new();
    for week in &schedule.weeks {
        let week_no = week_buf.format(week.week);
        for &day in &week.workdays {
            let date = day.to_string();
            for row in numbered_day(&week.day(day), numbering) {
                w.write_record([
                    week_no,
                    date.as_str(),
                    no_buf.format(row.no),
                    row.assignment.name.as_str(),
                    row.assignment.team.as_str(),
                    row.assignment.slot.as_str(),
                ])?;
            }
        }
    }
    finish(w)
}

pub fn export_assignments_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    numbering: NumberingMode,
) -> Result<()> {
    write_atomic(path, &assignments_csv(schedule, numbering)?)
}

#[derive(Serialize)]
struct ScheduleExport<'a> {
    run_id: Uuid,
    generated_at: DateTime<Utc>,
    schedule: &'a Schedule,
    summary: Summary,
}

/// Export JSON du planning et de son récapitulatif (jolie mise en forme).
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let export = ScheduleExport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        schedule,
        summary: summarize(schedule),
    };
    write_atomic(path, &serde_json::to_vec_pretty(&export)?)
}

/// CSV `name,total`, dans l'ordre du récapitulatif.
pub fn export_totals_csv<P: AsRef<Path>>(path: P, summary: &Summary) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["name", "total"])?;
    let mut buf = itoa::Buffer::new();
    for t in &summary.totals {
        w.write_record([t.name.as_str(), buf.format(t.total)])?;
    }
    write_atomic(path, &finish(w)?)
}

/// CSV `name,week_1,…,week_N` ; 0 pour les semaines sans piket.
pub fn export_weekly_csv<P: AsRef<Path>>(path: P, summary: &Summary) -> Result<()> {
    let matrix = &summary.per_week;
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    let mut header = vec!["name".to_string()];
    header.extend(matrix.weeks.iter().map(|wk| format!("week_{wk}")));
    w.write_record(&header)?;
    for row in &matrix.rows {
        let mut record = vec![row.name.clone()];
        record.extend(row.counts.iter().map(|c| c.to_string()));
        w.write_record(&record)?;
    }
    write_atomic(path, &finish(w)?)
}

fn finish(w: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    w.into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv: {}", e.error()))
}

/// Écriture atomique : fichier temporaire dans le même répertoire puis rename.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
