use super::ValidationError;
use crate::model::{Assignment, Person};
use crate::template::SlotTemplate;
use chrono::NaiveDate;

/// Associe positionnellement les personnes choisies aux slots du template.
///
/// `picks[i]` reçoit `template.slots[i]` ; aucune recherche, aucun état.
/// Il faut exactement une personne par slot.
pub fn label_day(
    day: NaiveDate,
    picks: &[&Person],
    template: &SlotTemplate,
) -> Result<Vec<Assignment>, ValidationError> {
    if picks.len() != template.len() {
        return Err(ValidationError::TemplateMismatch {
            template: template.len(),
            people_per_day: u32::try_from(picks.len()).unwrap_or(u32::MAX),
        });
    }
    Ok(picks
        .iter()
        .zip(template.slots.iter())
        .enumerate()
        .map(|(position, (person, slot))| Assignment {
            date: day,
            position,
            slot: slot.clone(),
            name: person.name.clone(),
            team: person.team.clone(),
        })
        .collect())
}
