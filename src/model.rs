use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type de shift : télétravail ou présentiel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    #[serde(rename = "WFH")]
    Wfh,
    #[serde(rename = "WFO")]
    Wfo,
}

impl ShiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftKind::Wfh => "WFH",
            ShiftKind::Wfo => "WFO",
        }
    }

    pub fn is_wfh(&self) -> bool {
        matches!(self, ShiftKind::Wfh)
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WFH" => Ok(ShiftKind::Wfh),
            "WFO" => Ok(ShiftKind::Wfo),
            other => Err(format!("unknown shift type '{other}' (expected WFH or WFO)")),
        }
    }
}

/// Définition d'un shift du catalogue (immuable pendant une génération).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    pub name: String,
    pub timing: String,
    #[serde(rename = "hc")]
    pub headcount: u32,
    #[serde(rename = "type")]
    pub kind: ShiftKind,
}

impl ShiftDefinition {
    /// Crée une définition en validant nom et effectif.
    pub fn new<N: Into<String>, T: Into<String>>(
        name: N,
        timing: T,
        headcount: u32,
        kind: ShiftKind,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("shift name cannot be empty".to_string());
        }
        if headcount == 0 {
            return Err("headcount must be > 0".to_string());
        }
        Ok(Self {
            name,
            timing: timing.into(),
            headcount,
            kind,
        })
    }
}

/// Catalogue ordonné de shifts, noms uniques.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ShiftDefinition>", into = "Vec<ShiftDefinition>")]
pub struct ShiftCatalog {
    shifts: Vec<ShiftDefinition>,
}

impl ShiftCatalog {
    pub fn new(shifts: Vec<ShiftDefinition>) -> Result<Self, String> {
        let mut catalog = Self::default();
        for shift in shifts {
            catalog.push(shift)?;
        }
        Ok(catalog)
    }

    /// Ajoute un shift en fin de catalogue ; refuse les doublons de nom.
    pub fn push(&mut self, shift: ShiftDefinition) -> Result<(), String> {
        if shift.name.trim().is_empty() {
            return Err("shift name cannot be empty".to_string());
        }
        if shift.headcount == 0 {
            return Err(format!("headcount must be > 0 for shift {}", shift.name));
        }
        if self.get(&shift.name).is_some() {
            return Err(format!("duplicate shift name: {}", shift.name));
        }
        self.shifts.push(shift);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShiftDefinition> {
        self.shifts.iter()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Noms des shifts WFH, dans l'ordre du catalogue.
    pub fn wfh_names(&self) -> impl Iterator<Item = &str> {
        self.shifts
            .iter()
            .filter(|s| s.kind.is_wfh())
            .map(|s| s.name.as_str())
    }
}

impl TryFrom<Vec<ShiftDefinition>> for ShiftCatalog {
    type Error = String;

    fn try_from(shifts: Vec<ShiftDefinition>) -> Result<Self, Self::Error> {
        Self::new(shifts)
    }
}

impl From<ShiftCatalog> for Vec<ShiftDefinition> {
    fn from(catalog: ShiftCatalog) -> Self {
        catalog.shifts
    }
}

impl<'a> IntoIterator for &'a ShiftCatalog {
    type Item = &'a ShiftDefinition;
    type IntoIter = std::slice::Iter<'a, ShiftDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.shifts.iter()
    }
}

/// Personne planifiée (PA), identifiée par son nom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ligne du planning : une personne sur un shift à une date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub shift: String,
    pub timing: String,
    pub kind: ShiftKind,
    pub person: Person,
}
