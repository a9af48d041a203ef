use crate::scheduler::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Personne de la liste de piket. Le nom sert de clé unique pendant un run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub team: String,
}

impl Person {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, team: T) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}

/// Roster validé : noms non vides et uniques.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Construit un roster en vérifiant l'unicité des noms (après trim).
    pub fn new(people: Vec<Person>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(people.len());
        let mut out = Vec::with_capacity(people.len());
        for (row, person) in people.into_iter().enumerate() {
            let name = person.name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::EmptyName(row + 1));
            }
            if !seen.insert(name.clone()) {
                return Err(ValidationError::DuplicateName(name));
            }
            out.push(Person {
                name,
                team: person.team.trim().to_string(),
            });
        }
        Ok(Self { people: out })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }
    pub fn len(&self) -> usize {
        self.people.len()
    }
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
    pub fn find<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name == name)
    }
}

/// Fait atomique : une personne sur une position de slot pour un jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    /// Position 0-based dans le template du jour.
    pub position: usize,
    pub slot: String,
    pub name: String,
    pub team: String,
}

/// Avertissement d'effectif (non bloquant) calculé avant l'algorithme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingWarning {
    pub week: u32,
    pub monday: NaiveDate,
    pub roster_size: usize,
    pub minimum: usize,
    pub total_slots: usize,
}

impl std::fmt::Display for StaffingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "week {} ({}): roster has {} people but {} slots need at least {}",
            self.week, self.monday, self.roster_size, self.total_slots, self.minimum
        )
    }
}

/// Résultat d'une semaine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResult {
    /// Numéro 1-based de la semaine dans le run.
    pub week: u32,
    pub monday: NaiveDate,
    pub workdays: Vec<NaiveDate>,
    pub assignments: Vec<Assignment>,
    /// Seed effectif de la semaine (None = entropie).
    #[serde(default)]
    pub seed: Option<u64>,
    /// Jours où la règle anti-consécutive a dû être relâchée.
    #[serde(default)]
    pub relaxed_days: Vec<NaiveDate>,
    #[serde(default)]
    pub staffing_warning: Option<StaffingWarning>,
}

impl WeekResult {
    pub fn new(week: u32, monday: NaiveDate) -> Self {
        Self {
            week,
            monday,
            workdays: Vec::new(),
            assignments: Vec::new(),
            seed: None,
            relaxed_days: Vec::new(),
            staffing_warning: None,
        }
    }

    /// Totaux réalisés par personne (ordre alphabétique).
    pub fn totals(&self) -> BTreeMap<String, u32> {
        let mut out = BTreeMap::new();
        for a in &self.assignments {
            *out.entry(a.name.clone()).or_insert(0) += 1;
        }
        out
    }

    /// Assignations d'un jour, triées par position.
    pub fn day(&self, date: NaiveDate) -> Vec<&Assignment> {
        let mut rows: Vec<&Assignment> =
            self.assignments.iter().filter(|a| a.date == date).collect();
        rows.sort_by_key(|a| a.position);
        rows
    }
}

/// Planning complet multi-semaines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_monday: NaiveDate,
    #[serde(default)]
    pub seed: Option<u64>,
    pub weeks: Vec<WeekResult>,
}

impl Schedule {
    /// Toutes les assignations, accompagnées du numéro de semaine.
    pub fn assignments(&self) -> impl Iterator<Item = (u32, &Assignment)> {
        self.weeks
            .iter()
            .flat_map(|w| w.assignments.iter().map(move |a| (w.week, a)))
    }

    pub fn total_assignments(&self) -> usize {
        self.weeks.iter().map(|w| w.assignments.len()).sum()
    }
}
