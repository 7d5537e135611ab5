use super::stages::EligibilityStage;
use super::summary::Summary;
use crate::model::{Assignment, Person, ShiftCatalog};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Options de génération
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Étapes d'éligibilité essayées dans l'ordre ; la dernière sert de repli final.
    pub stages: Vec<EligibilityStage>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            stages: EligibilityStage::DEFAULT_ORDER.to_vec(),
        }
    }
}

/// Entrées complètes d'une génération.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    pub catalog: ShiftCatalog,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub people: Vec<Person>,
    /// Plafond de shifts WFH par personne, cumulé sur toute la période
    /// (pas de remise à zéro hebdomadaire malgré le libellé).
    pub wfh_limit: u32,
}

impl RosterRequest {
    /// Nombre de dates couvertes (bornes incluses), 0 si la période est inversée.
    pub fn run_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

/// Remplissage d'un shift à une date : étape retenue et places vacantes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftFill {
    pub date: NaiveDate,
    pub shift: String,
    pub required: u32,
    pub selected: Vec<Person>,
    pub stage: EligibilityStage,
}

impl ShiftFill {
    /// Nombre de places non pourvues.
    pub fn shortfall(&self) -> u32 {
        let filled = u32::try_from(self.selected.len()).unwrap_or(u32::MAX);
        self.required.saturating_sub(filled)
    }

    pub fn is_underfilled(&self) -> bool {
        self.shortfall() > 0
    }
}

/// Résultat d'une génération.
#[derive(Debug, Clone, Serialize)]
pub struct RosterOutput {
    /// Triées par (date, nom de shift).
    pub assignments: Vec<Assignment>,
    pub summary: Summary,
    pub catalog: ShiftCatalog,
    /// Une entrée par (date, shift), dans l'ordre de traitement.
    pub fills: Vec<ShiftFill>,
}

impl RosterOutput {
    pub fn underfilled(&self) -> impl Iterator<Item = &ShiftFill> {
        self.fills.iter().filter(|f| f.is_underfilled())
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("shift catalog is empty")]
    EmptyCatalog,
    #[error("people list is empty")]
    NoPeople,
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("wfh limit must be > 0")]
    InvalidWfhLimit,
    #[error("no eligibility stage configured")]
    NoStages,
    #[error("duplicate person: {0}")]
    DuplicatePerson(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
