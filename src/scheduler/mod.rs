mod daily;
mod labeler;
mod quota;
mod repair;
mod types;
pub mod util;
mod week;

pub use daily::{assign_day, DailyPicks};
pub use labeler::label_day;
pub use quota::QuotaTracker;
pub use repair::{repair_week, RepairReport};
pub use types::{AssignOptions, SchedError, ValidationError};

use crate::calendar::WorkdayCalendar;
use crate::config::ScheduleConfig;
use crate::model::{Roster, Schedule, StaffingWarning, WeekResult};
use crate::template::SlotTemplate;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Planner : enchaîne les semaines, chacune avec un état de quota neuf.
pub struct Planner {
    roster: Roster,
    template: SlotTemplate,
    config: ScheduleConfig,
    calendar: Box<dyn WorkdayCalendar>,
}

impl Planner {
    /// Valide la configuration contre le template avant toute planification.
    pub fn new<C: WorkdayCalendar + 'static>(
        roster: Roster,
        template: SlotTemplate,
        config: ScheduleConfig,
        calendar: C,
    ) -> Result<Self, ValidationError> {
        template.validate()?;
        config.validate(&template)?;
        Ok(Self {
            roster,
            template,
            config,
            calendar: Box::new(calendar),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn template(&self) -> &SlotTemplate {
        &self.template
    }
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }
    pub fn calendar(&self) -> &dyn WorkdayCalendar {
        self.calendar.as_ref()
    }
    pub fn options(&self) -> AssignOptions {
        self.config.assign_options()
    }

    pub fn week_monday(&self, week: u32) -> Result<NaiveDate, ValidationError> {
        util::week_monday(self.config.start_monday, week).ok_or(ValidationError::DateOutOfRange {
            start: self.config.start_monday,
            weeks: week,
        })
    }

    /// Avertissements d'effectif pour toutes les semaines demandées.
    pub fn precheck(&self) -> Vec<StaffingWarning> {
        (1..=self.config.weeks)
            .filter_map(|week| {
                let monday = self.week_monday(week).ok()?;
                let days = self.calendar.workdays(monday).len();
                week::staffing_warning(self, week, monday, days)
            })
            .collect()
    }

    /// Planifie la semaine `week` (1-based) avec son propre générateur.
    pub fn schedule_week(&self, week: u32) -> Result<WeekResult, SchedError> {
        let seed = self.config.seed.map(|base| util::week_seed(base, week));
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut result = self.schedule_week_with_rng(week, &mut rng)?;
        result.seed = seed;
        Ok(result)
    }

    pub fn schedule_week_with_rng<R: Rng + ?Sized>(
        &self,
        week: u32,
        rng: &mut R,
    ) -> Result<WeekResult, SchedError> {
        week::schedule_week(self, week, self.week_monday(week)?, rng)
    }

    /// Toutes les semaines, dans l'ordre ; la première erreur interrompt le run.
    pub fn run(&self) -> Result<Schedule, SchedError> {
        let weeks = (1..=self.config.weeks)
            .map(|week| self.schedule_week(week))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schedule {
            start_monday: self.config.start_monday,
            seed: self.config.seed,
            weeks,
        })
    }
}
