use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Jours fériés nationaux à date fixe : (mois, jour, nom).
const FIXED_NATIONAL_HOLIDAYS: [(u32, u32, &str); 5] = [
    (1, 1, "Tahun Baru Masehi"),
    (5, 1, "Hari Buruh Internasional"),
    (6, 1, "Hari Lahir Pancasila"),
    (8, 17, "Hari Kemerdekaan Republik Indonesia"),
    (12, 25, "Hari Raya Natal"),
];

/// Jours fériés nationaux calés sur Pâques : (décalage en jours, nom).
const EASTER_NATIONAL_HOLIDAYS: [(i64, &str); 2] = [
    (-2, "Wafat Yesus Kristus"),
    (39, "Kenaikan Yesus Kristus"),
];

/// Source des jours ouvrés d'une semaine.
pub trait WorkdayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Jours lundi–vendredi non fériés de la semaine commençant à `monday`,
    /// dans l'ordre chronologique (0 à 5 jours).
    fn workdays(&self, monday: NaiveDate) -> Vec<NaiveDate> {
        (0..5)
            .filter_map(|offset| monday.checked_add_signed(Duration::days(offset)))
            .filter(|d| !self.is_holiday(*d))
            .collect()
    }
}

/// Calendrier sans aucun jour férié.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHolidays;

impl WorkdayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Jours fériés : fêtes nationales à date fixe et calées sur Pâques
/// (optionnelles) plus dates explicites, typiquement chargées depuis un
/// fichier pour les fêtes du calendrier lunaire.
#[derive(Debug, Default, Clone)]
pub struct HolidayCalendar {
    fixed_national: bool,
    dates: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn national() -> Self {
        Self {
            fixed_national: true,
            dates: BTreeMap::new(),
        }
    }

    pub fn add<S: Into<String>>(&mut self, date: NaiveDate, name: S) {
        self.dates.insert(date, name.into());
    }

    pub fn extend<I: IntoIterator<Item = (NaiveDate, String)>>(&mut self, items: I) {
        self.dates.extend(items);
    }

    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        if let Some(name) = self.dates.get(&date) {
            return Some(name.as_str());
        }
        if !self.fixed_national {
            return None;
        }
        let fixed = FIXED_NATIONAL_HOLIDAYS
            .iter()
            .find(|(m, d, _)| date.month() == *m && date.day() == *d)
            .map(|(_, _, name)| *name);
        fixed.or_else(|| {
            let offset = (date - easter_sunday(date.year())?).num_days();
            EASTER_NATIONAL_HOLIDAYS
                .iter()
                .find(|(o, _)| *o == offset)
                .map(|(_, name)| *name)
        })
    }
}

impl WorkdayCalendar for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.name_of(date).is_some()
    }
}

/// Dimanche de Pâques (calendrier grégorien, algorithme anonyme de
/// Meeus/Jones/Butcher).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let h = (19 * a + b - b / 4 - (b - (b + 8) / 25 + 1) / 3 + 15).rem_euclid(30);
    let l = (32 + 2 * (b % 4) + 2 * (c / 4) - h - c % 4).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Lundi le plus proche à venir : `today` si c'est un lundi.
pub fn monday_near_future(today: NaiveDate) -> NaiveDate {
    let ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    today + Duration::days(i64::from(ahead))
}
