use super::stages::{EligibilityStage, StageContext};
use super::state::RunState;
use super::{GenerateOptions, RosterRequest, SchedError, ShiftFill};
use crate::model::{Assignment, ShiftDefinition};
use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;

/// Parcourt les dates puis les shifts dans l'ordre du catalogue et tire au
/// sort les personnes de chaque shift. Retourne les lignes non triées et le
/// détail de remplissage.
pub(super) fn assign_days<R: Rng + ?Sized>(
    request: &RosterRequest,
    opts: &GenerateOptions,
    rng: &mut R,
) -> Result<(Vec<Assignment>, Vec<ShiftFill>), SchedError> {
    let people = &request.people;
    let run_days = request.run_days();
    let mut state = RunState::new(people.len());
    let mut rows = Vec::new();
    let mut fills = Vec::with_capacity(request.catalog.len() * run_days as usize);

    let mut current = request.start;
    loop {
        state.start_day();

        for shift in &request.catalog {
            let ctx = StageContext {
                kind: shift.kind,
                wfh_limit: request.wfh_limit,
                run_days,
            };
            let (stage, eligible) = eligible_for(&opts.stages, &ctx, &state, shift)?;

            let wanted = (shift.headcount as usize).min(eligible.len());
            let chosen: Vec<usize> = eligible.choose_multiple(rng, wanted).copied().collect();

            #[cfg(feature = "logging")]
            {
                if opts.stages.first() != Some(&stage) {
                    tracing::debug!(date = %current, shift = %shift.name, stage = stage.as_str(), "fallback eligibility stage");
                }
                if chosen.len() < shift.headcount as usize {
                    tracing::warn!(date = %current, shift = %shift.name, required = shift.headcount, filled = chosen.len(), "shift under-filled");
                }
            }

            let mut selected = Vec::with_capacity(chosen.len());
            for idx in chosen {
                state.record(idx, shift.kind);
                let person = people[idx].clone();
                rows.push(Assignment {
                    date: current,
                    shift: shift.name.clone(),
                    timing: shift.timing.clone(),
                    kind: shift.kind,
                    person: person.clone(),
                });
                selected.push(person);
            }

            fills.push(ShiftFill {
                date: current,
                shift: shift.name.clone(),
                required: shift.headcount,
                selected,
                stage,
            });
        }

        if current >= request.end {
            break;
        }
        current = current.succ_opt().context("date overflow")?;
    }

    Ok((rows, fills))
}

/// Première étape fournissant assez de candidats, sinon la dernière étape.
fn eligible_for(
    stages: &[EligibilityStage],
    ctx: &StageContext,
    state: &RunState,
    shift: &ShiftDefinition,
) -> Result<(EligibilityStage, Vec<usize>), SchedError> {
    let mut last = None;
    for stage in stages {
        let eligible: Vec<usize> = (0..state.len())
            .filter(|&idx| stage.admits(ctx, state.tally(idx), state.is_used_today(idx)))
            .collect();
        if eligible.len() >= shift.headcount as usize {
            return Ok((*stage, eligible));
        }
        last = Some((*stage, eligible));
    }
    last.ok_or(SchedError::NoStages)
}
