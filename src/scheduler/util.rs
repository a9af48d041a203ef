use chrono::{Duration, NaiveDate};

/// Effectif minimal théorique : ceil(jours × personnes/jour / cap).
pub fn min_people_required(workdays: usize, people_per_day: u32, weekly_cap: u32) -> usize {
    let total = workdays * people_per_day as usize;
    if weekly_cap == 0 {
        return total;
    }
    total.div_ceil(weekly_cap as usize)
}

/// Seed effectif d'une semaine : seed de base + offset 1-based.
pub fn week_seed(base: u64, week: u32) -> u64 {
    base.wrapping_add(u64::from(week))
}

/// Lundi de la semaine `week` (1-based) à partir du lundi de départ ;
/// `None` hors de la plage de dates représentable.
pub fn week_monday(start: NaiveDate, week: u32) -> Option<NaiveDate> {
    Duration::try_weeks(i64::from(week.saturating_sub(1)))
        .and_then(|offset| start.checked_add_signed(offset))
}

/// Dernier jour ouvrable possible (vendredi) de la semaine `week`.
pub fn week_friday(start: NaiveDate, week: u32) -> Option<NaiveDate> {
    week_monday(start, week).and_then(|monday| monday.checked_add_signed(Duration::days(4)))
}

pub(super) fn is_previous_day(last: NaiveDate, day: NaiveDate) -> bool {
    (day - last).num_days() == 1
}
