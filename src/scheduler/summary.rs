use crate::model::{Assignment, Person, ShiftCatalog};
use serde::Serialize;
use std::collections::BTreeMap;

/// Compteurs d'une personne : un par shift (ordre du catalogue), total et WFH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub person: Person,
    pub counts: Vec<u32>,
    pub total: u32,
    pub wfh: u32,
}

/// Tableau récapitulatif par personne.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Colonnes de comptage, dans l'ordre du catalogue.
    pub shift_names: Vec<String>,
    /// Une ligne par personne présente dans le planning, triées par nom.
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn build(catalog: &ShiftCatalog, assignments: &[Assignment]) -> Self {
        let shift_names: Vec<String> = catalog.iter().map(|s| s.name.clone()).collect();
        let wfh_columns: Vec<bool> = catalog.iter().map(|s| s.kind.is_wfh()).collect();

        let mut counts: BTreeMap<&Person, Vec<u32>> = BTreeMap::new();
        for a in assignments {
            let Some(col) = shift_names.iter().position(|n| *n == a.shift) else {
                continue;
            };
            let row = counts
                .entry(&a.person)
                .or_insert_with(|| vec![0; shift_names.len()]);
            row[col] += 1;
        }

        let rows = counts
            .into_iter()
            .map(|(person, counts)| {
                let total = counts.iter().sum();
                let wfh = counts
                    .iter()
                    .zip(&wfh_columns)
                    .filter(|(_, is_wfh)| **is_wfh)
                    .map(|(c, _)| *c)
                    .sum();
                SummaryRow {
                    person: person.clone(),
                    counts,
                    total,
                    wfh,
                }
            })
            .collect();

        Self { shift_names, rows }
    }

    pub fn row(&self, person: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.person.as_str() == person)
    }
}
