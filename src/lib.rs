#![forbid(unsafe_code)]
//! Shiftroster — génération de planning de shifts (WFH/WFO) sur une période.
//!
//! - Catalogue de shifts `Nom | Horaire | Effectif | Type`.
//! - Tirage aléatoire glouton, un shift par personne et par jour.
//! - Plafond WFH cumulé par personne, assoupli en cas de pénurie.
//! - Export CSV (planning, récapitulatif, catalogue) et JSON.

pub mod catalog;
pub mod io;
pub mod model;
pub mod scheduler;

pub use catalog::{parse_catalog, parse_people, CatalogError, LineError, DEFAULT_CATALOG};
pub use model::{Assignment, Person, ShiftCatalog, ShiftDefinition, ShiftKind};
pub use scheduler::{
    generate, EligibilityStage, GenerateOptions, RosterGenerator, RosterOutput, RosterRequest,
    SchedError, ShiftFill, Summary, SummaryRow,
};
