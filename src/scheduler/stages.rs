use super::state::PersonTally;
use crate::model::ShiftKind;
use serde::Serialize;

/// Paramètres communs aux filtres d'éligibilité pour un shift donné.
#[derive(Debug, Clone, Copy)]
pub struct StageContext {
    pub kind: ShiftKind,
    pub wfh_limit: u32,
    /// Nombre de dates de la période, utilisé comme borne haute du total par personne.
    pub run_days: u32,
}

/// Filtre d'éligibilité. Les étapes sont essayées dans l'ordre jusqu'à ce
/// qu'une d'elles fournisse assez de candidats ; sinon la dernière est retenue.
///
/// Une personne déjà placée dans la journée n'est jamais éligible, quelle que
/// soit l'étape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStage {
    /// Total sous la borne de période, et plafond WFH respecté pour un shift WFH.
    WithinLimits,
    /// Plafond WFH ignoré ; la borne de période reste appliquée.
    IgnoreWfhLimit,
    /// Seule l'exclusion « déjà placé aujourd'hui » subsiste.
    FreeToday,
}

impl EligibilityStage {
    pub const DEFAULT_ORDER: [EligibilityStage; 3] = [
        EligibilityStage::WithinLimits,
        EligibilityStage::IgnoreWfhLimit,
        EligibilityStage::FreeToday,
    ];

    pub fn admits(&self, ctx: &StageContext, tally: PersonTally, used_today: bool) -> bool {
        if used_today {
            return false;
        }
        match self {
            EligibilityStage::WithinLimits => {
                tally.total < ctx.run_days && (!ctx.kind.is_wfh() || tally.wfh < ctx.wfh_limit)
            }
            EligibilityStage::IgnoreWfhLimit => tally.total < ctx.run_days,
            EligibilityStage::FreeToday => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityStage::WithinLimits => "within_limits",
            EligibilityStage::IgnoreWfhLimit => "ignore_wfh_limit",
            EligibilityStage::FreeToday => "free_today",
        }
    }
}
