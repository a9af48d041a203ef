use crate::scheduler::ValidationError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Libellés du template par défaut : blocs A/B/C (5 slots) et D (2 slots).
pub const DEFAULT_SLOTS: [&str; 17] = [
    "A1,3,5,7",
    "A2,4,6,8",
    "A9,11,13,15",
    "A 10,12 FG A",
    "A 14,16 FG A",
    "B1,3,5,7",
    "B2,4,6,8",
    "B 9,11,13,15",
    "B 10,12 FG B",
    "B 14,16 FG B",
    "C1,3,5,7",
    "C2,4,6,8",
    "C9,11,13,15",
    "C 10,12,17 FG C",
    "C 14,16,17 FG C",
    "D 1,3,5,FG D",
    "D 2,4,6 FG D",
];

/// Template ordonné des slots de piket d'une journée.
///
/// Une personne par slot ; le premier caractère d'un libellé donne son
/// groupe d'affichage et n'a aucun effet sur l'algorithme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub slots: Vec<String>,
}

impl SlotTemplate {
    pub fn new<N: Into<String>>(name: N, slots: Vec<String>) -> Result<Self, ValidationError> {
        let template = Self {
            name: name.into(),
            description: None,
            slots,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slots.is_empty() {
            return Err(ValidationError::EmptyTemplate);
        }
        if let Some(pos) = self.slots.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySlotLabel(pos));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    pub fn label(&self, position: usize) -> Option<&str> {
        self.slots.get(position).map(String::as_str)
    }

    /// Groupes dans l'ordre de première apparition.
    pub fn groups(&self) -> Vec<char> {
        let mut out = Vec::new();
        for g in self.slots.iter().filter_map(|s| slot_group(s)) {
            if !out.contains(&g) {
                out.push(g);
            }
        }
        out
    }
}

impl Default for SlotTemplate {
    fn default() -> Self {
        Self {
            name: "piket-17".into(),
            description: Some("Template par défaut : A/B/C/D, 17 slots".into()),
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Groupe d'un libellé : premier caractère non blanc, en majuscule.
pub fn slot_group(label: &str) -> Option<char> {
    label
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
}

pub fn load_template_from_file<P: AsRef<Path>>(path: P) -> Result<SlotTemplate> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading template {}", path.display()))?;
    let template: SlotTemplate = serde_json::from_slice(&data)
        .with_context(|| format!("parsing template {}", path.display()))?;
    template.validate()?;
    Ok(template)
}

pub fn export_template_json<P: AsRef<Path>>(path: P, template: &SlotTemplate) -> Result<()> {
    let json = serde_json::to_vec_pretty(template)?;
    crate::io::write_atomic(path, &json)
}
