use super::{assign_day, label_day, repair_week, util, Planner, QuotaTracker, SchedError};
use crate::model::{StaffingWarning, WeekResult};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, warn};

pub(super) fn staffing_warning(
    planner: &Planner,
    week: u32,
    monday: NaiveDate,
    workdays: usize,
) -> Option<StaffingWarning> {
    let opts = planner.options();
    let minimum = util::min_people_required(workdays, opts.people_per_day, opts.weekly_cap);
    let roster_size = planner.roster().len();
    if roster_size >= minimum {
        return None;
    }
    Some(StaffingWarning {
        week,
        monday,
        roster_size,
        minimum,
        total_slots: workdays * opts.people_per_day as usize,
    })
}

pub(super) fn schedule_week<R: Rng + ?Sized>(
    planner: &Planner,
    week: u32,
    monday: NaiveDate,
    rng: &mut R,
) -> Result<WeekResult, SchedError> {
    let opts = planner.options();
    let roster = planner.roster();
    let workdays = planner.calendar().workdays(monday);

    let mut result = WeekResult::new(week, monday);
    result.staffing_warning = staffing_warning(planner, week, monday, workdays.len());
    if let Some(w) = &result.staffing_warning {
        warn!(warning = %w, "staffing below theoretical minimum");
    }

    let mut tracker = QuotaTracker::new(roster, opts);
    for &day in &workdays {
        let picks = assign_day(roster, day, opts.people_per_day as usize, &mut tracker, rng)?;
        if picks.relaxed {
            result.relaxed_days.push(day);
        }
        result
            .assignments
            .extend(label_day(day, &picks.people, planner.template())?);
    }
    result.workdays = workdays;

    let report = repair_week(&mut result, roster, opts.weekly_cap, rng)?;
    info!(
        week,
        %monday,
        days = result.workdays.len(),
        assignments = result.assignments.len(),
        repaired = report.replacements,
        "week scheduled"
    );
    Ok(result)
}
