mod assignment;
mod stages;
mod state;
mod summary;
mod types;

pub use stages::{EligibilityStage, StageContext};
pub use state::PersonTally;
pub use summary::{Summary, SummaryRow};
pub use types::{GenerateOptions, RosterOutput, RosterRequest, SchedError, ShiftFill};

use crate::model::{Person, ShiftCatalog};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Générateur de planning : applique la politique d'éligibilité configurée.
///
/// Chaque appel possède son propre état et sa propre source aléatoire ;
/// plusieurs générations peuvent tourner en parallèle sans partage.
#[derive(Debug, Clone, Default)]
pub struct RosterGenerator {
    opts: GenerateOptions,
}

impl RosterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: GenerateOptions) -> Self {
        Self { opts }
    }

    /// Génère avec une source aléatoire initialisée depuis l'OS.
    pub fn generate(&self, request: &RosterRequest) -> Result<RosterOutput, SchedError> {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(request, &mut rng)
    }

    /// Génération reproductible : même graine et mêmes entrées, même planning.
    pub fn generate_seeded(
        &self,
        request: &RosterRequest,
        seed: u64,
    ) -> Result<RosterOutput, SchedError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(request, &mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &RosterRequest,
        rng: &mut R,
    ) -> Result<RosterOutput, SchedError> {
        validate(request, &self.opts)?;

        let (mut assignments, fills) = assignment::assign_days(request, &self.opts, rng)?;
        // tri stable : l'ordre de tirage est conservé au sein d'un même shift
        assignments.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.shift.cmp(&b.shift)));

        let summary = Summary::build(&request.catalog, &assignments);
        Ok(RosterOutput {
            assignments,
            summary,
            catalog: request.catalog.clone(),
            fills,
        })
    }
}

/// Raccourci : génère avec la politique par défaut et la source aléatoire fournie.
pub fn generate<R: Rng + ?Sized>(
    catalog: &ShiftCatalog,
    start: NaiveDate,
    end: NaiveDate,
    people: &[Person],
    wfh_limit: u32,
    rng: &mut R,
) -> Result<RosterOutput, SchedError> {
    let request = RosterRequest {
        catalog: catalog.clone(),
        start,
        end,
        people: people.to_vec(),
        wfh_limit,
    };
    RosterGenerator::new().generate_with_rng(&request, rng)
}

fn validate(request: &RosterRequest, opts: &GenerateOptions) -> Result<(), SchedError> {
    if request.catalog.is_empty() {
        return Err(SchedError::EmptyCatalog);
    }
    if request.people.is_empty() {
        return Err(SchedError::NoPeople);
    }
    if request.end < request.start {
        return Err(SchedError::InvalidDateRange {
            start: request.start,
            end: request.end,
        });
    }
    if request.wfh_limit == 0 {
        return Err(SchedError::InvalidWfhLimit);
    }
    if opts.stages.is_empty() {
        return Err(SchedError::NoStages);
    }
    let mut seen = HashSet::new();
    for p in &request.people {
        if !seen.insert(p.as_str()) {
            return Err(SchedError::DuplicatePerson(p.as_str().to_string()));
        }
    }
    Ok(())
}
