use crate::model::{Person, ShiftCatalog, ShiftDefinition, ShiftKind};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Catalogue pré-rempli proposé par défaut.
pub const DEFAULT_CATALOG: &str = "Early Morning | 07:00-16:00 | 1 | WFH\n\
Morning | 09:00-18:00 | 3 | WFO\n\
General | 10:00-19:00 | 4 | WFO\n\
Kit Kat | 10:00-14:00 & 19:00-23:00 | 3 | WFH";

/// Plafond WFH par défaut.
pub const DEFAULT_WFH_LIMIT: u32 = 2;

/// Ligne de catalogue invalide (numérotée à partir de 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line_no: usize,
    pub line: String,
    pub reason: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: '{}': {}", self.line_no, self.line, self.reason)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("shift catalog is empty")]
    Empty,
    #[error("{} malformed line(s): {}", .0.len(), join_errors(.0))]
    Malformed(Vec<LineError>),
}

impl CatalogError {
    /// Détail ligne par ligne (vide pour `Empty`).
    pub fn lines(&self) -> &[LineError] {
        match self {
            CatalogError::Empty => &[],
            CatalogError::Malformed(errors) => errors,
        }
    }
}

fn join_errors(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse un catalogue au format `Nom | Horaire | Effectif | Type`, une ligne par shift.
///
/// Le nom unique du shift est `"Nom (Horaire)"`. Toutes les lignes fautives
/// sont collectées ; les lignes vides sont ignorées.
pub fn parse_catalog(text: &str) -> Result<ShiftCatalog, CatalogError> {
    let mut catalog = ShiftCatalog::default();
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = parse_catalog_line(line).and_then(|shift| catalog.push(shift));
        if let Err(reason) = parsed {
            errors.push(LineError {
                line_no: idx + 1,
                line: line.to_string(),
                reason,
            });
        }
    }

    if !errors.is_empty() {
        return Err(CatalogError::Malformed(errors));
    }
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(catalog)
}

/// Parse une seule ligne de catalogue.
pub fn parse_catalog_line(line: &str) -> Result<ShiftDefinition, String> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [name, timing, headcount, kind] = fields.as_slice() else {
        return Err(format!(
            "expected 4 fields 'Name | Timing | HC | Type', got {}",
            fields.len()
        ));
    };
    if name.is_empty() {
        return Err("missing shift name".to_string());
    }
    if timing.is_empty() {
        return Err("missing timing".to_string());
    }
    let headcount: u32 = headcount
        .parse()
        .map_err(|_| format!("invalid headcount '{headcount}'"))?;
    let kind: ShiftKind = kind.parse()?;
    ShiftDefinition::new(format!("{name} ({timing})"), *timing, headcount, kind)
}

/// Liste de personnes séparées par virgules ou retours à la ligne.
/// Les noms vides sont ignorés, les doublons aussi (première occurrence gardée).
pub fn parse_people(text: &str) -> Vec<Person> {
    let mut seen = HashSet::new();
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(Person::new)
        .collect()
}
