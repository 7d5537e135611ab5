#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use shiftroster::{
    catalog::{self, DEFAULT_CATALOG, DEFAULT_WFH_LIMIT},
    io,
    model::ShiftCatalog,
    scheduler::{RosterGenerator, RosterOutput, RosterRequest},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur de planning de shifts WFH/WFO
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un planning
    Generate {
        /// Requête JSON complète (prioritaire sur les autres options d'entrée)
        #[arg(long)]
        request: Option<String>,
        /// Fichier catalogue `Name | Timing | HC | Type`
        #[arg(long, conflicts_with = "shift")]
        shifts_file: Option<String>,
        /// Ligne de catalogue (répétable)
        #[arg(long)]
        shift: Vec<String>,
        /// liste "nom1,nom2,..."
        #[arg(long)]
        people: Option<String>,
        /// Fichier de noms (virgules ou un par ligne)
        #[arg(long, conflicts_with = "people")]
        people_file: Option<String>,
        /// YYYY-MM-DD, défaut : aujourd'hui
        #[arg(long)]
        start: Option<NaiveDate>,
        /// YYYY-MM-DD, défaut : aujourd'hui
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Plafond WFH par personne sur toute la période
        #[arg(long, default_value_t = DEFAULT_WFH_LIMIT)]
        wfh_limit: u32,
        /// Graine pour un tirage reproductible
        #[arg(long)]
        seed: Option<u64>,
        /// Dossier de sortie des trois feuilles CSV
        #[arg(long)]
        out_dir: Option<String>,
        /// Export JSON complet
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Vérifier un catalogue de shifts
    Validate {
        /// Fichier catalogue ; défaut : catalogue intégré
        #[arg(long)]
        shifts_file: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            request,
            shifts_file,
            shift,
            people,
            people_file,
            start,
            end,
            wfh_limit,
            seed,
            out_dir,
            out_json,
        } => {
            let (request, seed) = if let Some(path) = request {
                let (req, file_seed) = io::load_request(path)?;
                (req, seed.or(file_seed))
            } else {
                let catalog = load_catalog(shifts_file.as_deref(), &shift)?;
                let people = match (people, people_file) {
                    (Some(list), _) => catalog::parse_people(&list),
                    (None, Some(path)) => io::load_people(path)?,
                    (None, None) => Vec::new(),
                };
                if people.is_empty() {
                    bail!("no people given (use --people or --people-file)");
                }
                let today = Local::now().date_naive();
                let req = RosterRequest {
                    catalog,
                    start: start.unwrap_or(today),
                    end: end.unwrap_or(today),
                    people,
                    wfh_limit,
                };
                (req, seed)
            };

            let generator = RosterGenerator::new();
            let output = match seed {
                Some(seed) => generator.generate_seeded(&request, seed)?,
                None => generator.generate(&request)?,
            };

            if let Some(dir) = out_dir {
                for path in io::export_bundle(dir, &output)? {
                    println!("wrote {}", path.display());
                }
            }
            if let Some(path) = out_json {
                io::export_json(path, &output)?;
            }
            print_schedule(&output);

            let underfilled: Vec<_> = output.underfilled().collect();
            if underfilled.is_empty() {
                0
            } else {
                for fill in &underfilled {
                    eprintln!(
                        "warning: {} {} under-filled ({}/{})",
                        fill.date,
                        fill.shift,
                        fill.selected.len(),
                        fill.required
                    );
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Validate { shifts_file } => {
            let text = match shifts_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {path}"))?,
                None => DEFAULT_CATALOG.to_string(),
            };
            match catalog::parse_catalog(&text) {
                Ok(catalog) => {
                    for s in &catalog {
                        println!("{} | {} | {}", s.name, s.headcount, s.kind);
                    }
                    println!("OK: {} shift(s)", catalog.len());
                    0
                }
                Err(err) => {
                    if err.lines().is_empty() {
                        eprintln!("Error: {err}");
                    }
                    for line in err.lines() {
                        eprintln!("Error parsing {line}");
                    }
                    2
                }
            }
        }
    };

    std::process::exit(code);
}

fn load_catalog(shifts_file: Option<&str>, lines: &[String]) -> Result<ShiftCatalog> {
    if let Some(path) = shifts_file {
        return io::load_catalog(path);
    }
    let text = if lines.is_empty() {
        DEFAULT_CATALOG.to_string()
    } else {
        lines.join("\n")
    };
    Ok(catalog::parse_catalog(&text)?)
}

fn print_schedule(output: &RosterOutput) {
    // impression compacte
    for a in &output.assignments {
        println!("{} | {} | {} | {}", a.date, a.shift, a.kind, a.person);
    }
    for row in &output.summary.rows {
        println!("{}: {} shift(s), {} WFH", row.person, row.total, row.wfh);
    }
}
