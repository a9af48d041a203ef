use crate::calendar;
use crate::scheduler::{util, AssignOptions, ValidationError};
use crate::template::SlotTemplate;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WEEKS: u32 = 1;
pub const DEFAULT_PEOPLE_PER_DAY: u32 = 17;
pub const DEFAULT_WEEKLY_CAP: u32 = 2;

/// Paramètres d'un run de génération.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub weeks: u32,
    pub people_per_day: u32,
    pub weekly_cap: u32,
    pub forbid_consecutive_days: bool,
    pub start_monday: NaiveDate,
    /// None : tirage différent à chaque run.
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
            people_per_day: DEFAULT_PEOPLE_PER_DAY,
            weekly_cap: DEFAULT_WEEKLY_CAP,
            forbid_consecutive_days: true,
            start_monday: calendar::monday_near_future(Local::now().date_naive()),
            seed: None,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self, template: &SlotTemplate) -> Result<(), ValidationError> {
        if self.weeks == 0 {
            return Err(ValidationError::NotPositive("weeks"));
        }
        if self.people_per_day == 0 {
            return Err(ValidationError::NotPositive("people_per_day"));
        }
        if self.weekly_cap == 0 {
            return Err(ValidationError::NotPositive("weekly_cap"));
        }
        if template.len() != self.people_per_day as usize {
            return Err(ValidationError::TemplateMismatch {
                template: template.len(),
                people_per_day: self.people_per_day,
            });
        }
        if !calendar::is_monday(self.start_monday) {
            return Err(ValidationError::StartNotMonday(self.start_monday));
        }
        if util::week_friday(self.start_monday, self.weeks).is_none() {
            return Err(ValidationError::DateOutOfRange {
                start: self.start_monday,
                weeks: self.weeks,
            });
        }
        Ok(())
    }

    pub fn assign_options(&self) -> AssignOptions {
        AssignOptions {
            people_per_day: self.people_per_day,
            weekly_cap: self.weekly_cap,
            forbid_consecutive_days: self.forbid_consecutive_days,
        }
    }

    /// Charge une config JSON ; les champs absents prennent leur valeur par défaut.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&data).with_context(|| format!("parsing config {}", path.display()))
    }
}
