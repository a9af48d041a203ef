use chrono::NaiveDate;
use thiserror::Error;

/// Options d'assignation d'une semaine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    pub people_per_day: u32,
    pub weekly_cap: u32,
    pub forbid_consecutive_days: bool,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            people_per_day: 17,
            weekly_cap: 2,
            forbid_consecutive_days: true,
        }
    }
}

/// Entrée invalide, détectée avant toute tentative de planification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("roster is missing required column: {0}")]
    MissingColumn(&'static str),
    /// Ligne du fichier pour un import CSV, rang 1-based sinon.
    #[error("empty person name at row {0}")]
    EmptyName(usize),
    #[error("duplicate person name: {0}")]
    DuplicateName(String),
    #[error("slot template must contain at least one slot")]
    EmptyTemplate,
    #[error("slot label at position {0} is empty")]
    EmptySlotLabel(usize),
    #[error("slot template has {template} slots but people_per_day is {people_per_day}")]
    TemplateMismatch { template: usize, people_per_day: u32 },
    #[error("start date {0} is not a Monday")]
    StartNotMonday(NaiveDate),
    #[error("{0} must be >= 1")]
    NotPositive(&'static str),
    #[error("{weeks} week(s) from {start} run past the last supported date")]
    DateOutOfRange { start: NaiveDate, weeks: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not enough candidates for {date}")]
    Shortage { date: NaiveDate },
    #[error("repair pass left {} over the weekly cap in week starting {monday}", .people.join(", "))]
    RepairExhausted {
        monday: NaiveDate,
        people: Vec<String>,
    },
}
