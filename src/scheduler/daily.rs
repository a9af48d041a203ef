use super::{QuotaTracker, SchedError};
use crate::model::{Person, Roster};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, error};

/// Sélection ordonnée d'une journée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPicks<'r> {
    pub people: Vec<&'r Person>,
    /// Vrai si la phase de relâchement a dû compléter la journée.
    pub relaxed: bool,
}

/// Choisit exactement `required` personnes distinctes pour `day`.
///
/// Les paliers de quota sont parcourus du moins servi au plus servi ; à
/// l'intérieur d'un palier l'ordre est tiré au hasard. Si la règle
/// anti-consécutive bloque, on complète en l'ignorant (le cap, lui, reste
/// respecté). Sinon : `SchedError::Shortage`.
pub fn assign_day<'r, R: Rng + ?Sized>(
    roster: &'r Roster,
    day: NaiveDate,
    required: usize,
    tracker: &mut QuotaTracker,
    rng: &mut R,
) -> Result<DailyPicks<'r>, SchedError> {
    let mut picks: Vec<&'r Person> = Vec::with_capacity(required);

    for tier in 0..tracker.cap() {
        if picks.len() == required {
            break;
        }
        let mut group: Vec<&'r Person> = roster
            .people()
            .iter()
            .filter(|p| {
                tracker.count(&p.name) == tier
                    && tracker.is_eligible(&p.name, day, true)
                    && !already_picked(&picks, p)
            })
            .collect();
        group.shuffle(rng);
        take_into(&mut picks, group, required, tracker, day);
    }

    let mut relaxed = false;
    if picks.len() < required {
        let mut group: Vec<&'r Person> = roster
            .people()
            .iter()
            .filter(|p| tracker.is_eligible(&p.name, day, false) && !already_picked(&picks, p))
            .collect();
        group.shuffle(rng);
        let before = picks.len();
        take_into(&mut picks, group, required, tracker, day);
        relaxed = picks.len() > before;
        if relaxed {
            debug!(%day, relaxed = picks.len() - before, "consecutive-day rule relaxed");
        }
    }

    if picks.len() < required {
        error!(%day, picked = picks.len(), required, "not enough candidates");
        return Err(SchedError::Shortage { date: day });
    }

    Ok(DailyPicks {
        people: picks,
        relaxed,
    })
}

fn already_picked(picks: &[&Person], person: &Person) -> bool {
    picks.iter().any(|p| p.name == person.name)
}

fn take_into<'r>(
    picks: &mut Vec<&'r Person>,
    group: Vec<&'r Person>,
    required: usize,
    tracker: &mut QuotaTracker,
    day: NaiveDate,
) {
    let needed = required.saturating_sub(picks.len());
    for person in group.into_iter().take(needed) {
        tracker.record(&person.name, day);
        picks.push(person);
    }
}
