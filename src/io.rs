use crate::catalog::{self, DEFAULT_WFH_LIMIT};
use crate::model::{Assignment, Person, ShiftCatalog, ShiftDefinition};
use crate::scheduler::{RosterOutput, RosterRequest, Summary};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const SCHEDULE_FILE: &str = "shift_schedule.csv";
pub const SUMMARY_FILE: &str = "summary_stats.csv";
pub const SHIFT_INFO_FILE: &str = "shift_info.csv";

/// Catalogue dans un fichier de requête : texte brut, lignes, ou définitions structurées.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShiftsInput {
    Text(String),
    Lines(Vec<String>),
    Definitions(Vec<ShiftDefinition>),
}

/// Personnes : `"a, b, c"` ou `["a", "b"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PeopleInput {
    Text(String),
    List(Vec<String>),
}

/// Fichier JSON décrivant une génération complète.
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub shifts: Option<ShiftsInput>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub people: PeopleInput,
    #[serde(default = "default_wfh_limit")]
    pub wfh_limit: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_wfh_limit() -> u32 {
    DEFAULT_WFH_LIMIT
}

impl RequestFile {
    /// Convertit en requête validée ; sans catalogue, le catalogue par défaut est utilisé.
    pub fn into_request(self) -> anyhow::Result<RosterRequest> {
        let catalog = match self.shifts {
            None => catalog::parse_catalog(catalog::DEFAULT_CATALOG)?,
            Some(ShiftsInput::Text(text)) => catalog::parse_catalog(&text)?,
            Some(ShiftsInput::Lines(lines)) => catalog::parse_catalog(&lines.join("\n"))?,
            Some(ShiftsInput::Definitions(defs)) => {
                ShiftCatalog::new(defs).map_err(anyhow::Error::msg)?
            }
        };
        let people = match self.people {
            PeopleInput::Text(text) => catalog::parse_people(&text),
            PeopleInput::List(list) => catalog::parse_people(&list.join(",")),
        };
        if people.is_empty() {
            bail!("request contains no people");
        }
        Ok(RosterRequest {
            catalog,
            start: self.start,
            end: self.end,
            people,
            wfh_limit: self.wfh_limit,
        })
    }
}

/// Lecture d'un fichier de requête JSON. Retourne la requête et la graine éventuelle.
pub fn load_request<P: AsRef<Path>>(path: P) -> anyhow::Result<(RosterRequest, Option<u64>)> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: RequestFile = serde_json::from_slice(&data)
        .with_context(|| format!("parsing request {}", path.display()))?;
    let seed = file.seed;
    Ok((file.into_request()?, seed))
}

/// Lecture d'un fichier texte de catalogue (`Name | Timing | HC | Type`).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> anyhow::Result<ShiftCatalog> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog = catalog::parse_catalog(&text)
        .with_context(|| format!("invalid shift catalog {}", path.display()))?;
    Ok(catalog)
}

/// Lecture d'une liste de personnes (virgules ou une par ligne).
pub fn load_people<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(catalog::parse_people(&text))
}

/// Export CSV du planning: header `Date,Shift Name,Shift Timing,Shift Type,PA Name`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    assignments: &[Assignment],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["Date", "Shift Name", "Shift Timing", "Shift Type", "PA Name"])?;
    for a in assignments {
        let date = a.date.format("%Y-%m-%d").to_string();
        w.write_record([
            date.as_str(),
            a.shift.as_str(),
            a.timing.as_str(),
            a.kind.as_str(),
            a.person.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du récapitulatif: header `PA Name,<shifts...>,Total Shifts,WFH Shifts`
pub fn export_summary_csv<P: AsRef<Path>>(path: P, summary: &Summary) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    let mut header = Vec::with_capacity(summary.shift_names.len() + 3);
    header.push("PA Name");
    header.extend(summary.shift_names.iter().map(String::as_str));
    header.push("Total Shifts");
    header.push("WFH Shifts");
    w.write_record(&header)?;

    let mut buf = itoa::Buffer::new();
    for row in &summary.rows {
        w.write_field(row.person.as_str())?;
        for count in &row.counts {
            w.write_field(buf.format(*count))?;
        }
        w.write_field(buf.format(row.total))?;
        w.write_field(buf.format(row.wfh))?;
        w.write_record(None::<&[u8]>)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du catalogue: header `name,timing,type,hc`
pub fn export_shift_info_csv<P: AsRef<Path>>(
    path: P,
    catalog: &ShiftCatalog,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["name", "timing", "type", "hc"])?;
    let mut buf = itoa::Buffer::new();
    for s in catalog {
        w.write_record([
            s.name.as_str(),
            s.timing.as_str(),
            s.kind.as_str(),
            buf.format(s.headcount),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Écrit les trois feuilles (planning, récapitulatif, catalogue) dans `dir`.
pub fn export_bundle<P: AsRef<Path>>(
    dir: P,
    output: &RosterOutput,
) -> anyhow::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let schedule = dir.join(SCHEDULE_FILE);
    export_schedule_csv(&schedule, &output.assignments)
        .with_context(|| format!("writing {}", schedule.display()))?;
    let summary = dir.join(SUMMARY_FILE);
    export_summary_csv(&summary, &output.summary)
        .with_context(|| format!("writing {}", summary.display()))?;
    let info = dir.join(SHIFT_INFO_FILE);
    export_shift_info_csv(&info, &output.catalog)
        .with_context(|| format!("writing {}", info.display()))?;

    Ok(vec![schedule, summary, info])
}

/// Export JSON complet (planning, récapitulatif, catalogue, remplissage).
/// Écriture via un fichier temporaire du même dossier, puis renommage.
pub fn export_json<P: AsRef<Path>>(path: P, output: &RosterOutput) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let json = serde_json::to_vec_pretty(output)?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
