use super::{util, AssignOptions};
use crate::model::Roster;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Quota {
    count: u32,
    last_day: Option<NaiveDate>,
}

/// État de quota d'une seule semaine : compteur et dernier jour par personne.
///
/// Créé neuf pour chaque semaine puis jeté ; rien ne passe d'une semaine
/// à l'autre.
#[derive(Debug, Clone)]
pub struct QuotaTracker {
    cap: u32,
    forbid_consecutive: bool,
    entries: HashMap<String, Quota>,
}

impl QuotaTracker {
    pub fn new(roster: &Roster, opts: AssignOptions) -> Self {
        let entries = roster
            .people()
            .iter()
            .map(|p| (p.name.clone(), Quota::default()))
            .collect();
        Self {
            cap: opts.weekly_cap,
            forbid_consecutive: opts.forbid_consecutive_days,
            entries,
        }
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn count(&self, name: &str) -> u32 {
        self.entries.get(name).map_or(0, |q| q.count)
    }

    pub fn last_day(&self, name: &str) -> Option<NaiveDate> {
        self.entries.get(name).and_then(|q| q.last_day)
    }

    /// Faux si le cap est atteint ; en mode strict, faux aussi si la personne
    /// a été de piket la veille (quand les jours consécutifs sont interdits).
    pub fn is_eligible(&self, name: &str, day: NaiveDate, strict: bool) -> bool {
        if self.count(name) >= self.cap {
            return false;
        }
        if strict && self.forbid_consecutive {
            if let Some(last) = self.last_day(name) {
                if util::is_previous_day(last, day) {
                    return false;
                }
            }
        }
        true
    }

    pub fn record(&mut self, name: &str, day: NaiveDate) {
        let entry = self.entries.entry(name.to_string()).or_default();
        entry.count += 1;
        entry.last_day = Some(day);
    }
}
