#![forbid(unsafe_code)]
//! Piket — génération de jadwal piket hebdomadaires (sans BD).
//!
//! - Roster CSV `Nama,Team`, template de slots fixe.
//! - Tirage équitable par paliers de quota, cap hebdomadaire, anti-jours consécutifs.
//! - Passe de réparation du cap, une semaine à la fois, seed reproductible.
//! - Exports CSV/JSON et récapitulatifs.

pub mod calendar;
pub mod config;
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod summary;
pub mod template;

pub use calendar::{HolidayCalendar, NoHolidays, WorkdayCalendar};
pub use config::ScheduleConfig;
pub use model::{Assignment, Person, Roster, Schedule, StaffingWarning, WeekResult};
pub use render::{fmt_date_id, NumberingMode, TextWeekRenderer, WeekRenderer};
pub use scheduler::{
    assign_day, label_day, repair_week, AssignOptions, Planner, QuotaTracker, SchedError,
    ValidationError,
};
pub use summary::{summarize, PersonTotal, Summary, WeeklyMatrix};
pub use template::{export_template_json, load_template_from_file, SlotTemplate};
