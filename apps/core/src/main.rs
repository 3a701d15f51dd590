// Linguistic Lab CLI Entry Point
// Drives the concept generator and constraint analyzer from the command line

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use linguistic_lab::engine::{
    ConstraintCategory, LexicalConstraintAnalyzer, RandomSource, RngSource,
    TemplateConceptGenerator,
};
use linguistic_lab::fs_manager::LabPaths;
use linguistic_lab::metrics::MetricsTracker;
use linguistic_lab::models::ElementKind;
use linguistic_lab::seed::seed_concepts;
use linguistic_lab::storage::{self, FileStore};
use linguistic_lab::{logging, LabConfig, LabState};

#[derive(Parser)]
#[command(name = "linguistic-lab")]
#[command(about = "Concept generation and linguistic constraint analysis", long_about = None)]
struct Cli {
    /// Seed for the random source; omit for a fresh thread RNG
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate concepts from workspace elements and save them
    Generate {
        /// Constraint category tag (e.g. linear-time)
        #[arg(long, default_value = "subject-object")]
        constraint: ConstraintCategory,
        /// Element types to place on the canvas, in order
        #[arg(long, value_delimiter = ',', required = true)]
        elements: Vec<ElementKind>,
        /// Print the concepts without saving them
        #[arg(long)]
        dry_run: bool,
    },
    /// Save a manually named concept built from workspace elements
    Save {
        #[arg(long, default_value = "subject-object")]
        constraint: ConstraintCategory,
        #[arg(long, value_delimiter = ',', required = true)]
        elements: Vec<ElementKind>,
        /// Concept name; a name is suggested when omitted
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: String,
    },
    /// Score text against every constraint category
    Analyze { text: String },
    /// List constraint gaps found in text, with alternative phrasings
    Gaps { text: String },
    /// Rephrase text to bypass one constraint
    Alternatives {
        text: String,
        #[arg(long)]
        constraint: ConstraintCategory,
    },
    /// Suggest an approach to a problem using saved concepts
    Solve {
        problem: String,
        /// Ids of the saved concepts to apply; all saved concepts when omitted
        #[arg(long, value_delimiter = ',')]
        concepts: Vec<String>,
        /// Record the measured improvement (percent) as a problem-solving test
        #[arg(long)]
        improvement: Option<f64>,
    },
    /// Print the seed community feed
    Seeds,
    /// Print the metrics report
    Metrics {
        /// Clear all recorded metrics first
        #[arg(long)]
        reset: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match LabConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    logging::init(config.log_format);

    if let Err(e) = run(cli, &config) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &LabConfig) -> Result<()> {
    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };
    let analyzer = LexicalConstraintAnalyzer::new();

    match cli.command {
        Commands::Generate {
            constraint,
            elements,
            dry_run,
        } => {
            let mut store = open_store(config)?;
            let mut lab = load_lab(config, &store)?;
            place_elements(&mut lab, constraint, &elements);

            let concepts = lab.generate_concepts(&TemplateConceptGenerator::new(), rng.as_mut())?;
            if !dry_run {
                persist(config, &mut store, &lab, &concepts)?;
            }
            print_json(&concepts)
        }
        Commands::Save {
            constraint,
            elements,
            name,
            description,
        } => {
            let mut store = open_store(config)?;
            let mut lab = load_lab(config, &store)?;
            place_elements(&mut lab, constraint, &elements);

            let name = name
                .or_else(|| lab.suggest_concept_name())
                .unwrap_or_default();
            let concept = lab.save_concept(&name, &description)?.clone();
            persist(config, &mut store, &lab, std::slice::from_ref(&concept))?;
            print_json(&concept)
        }
        Commands::Analyze { text } => print_json(&analyzer.analyze(&text)),
        Commands::Gaps { text } => print_json(&analyzer.identify_gaps(&text, rng.as_mut())),
        Commands::Alternatives { text, constraint } => {
            print_json(&analyzer.generate_alternatives(&text, constraint, rng.as_mut()))
        }
        Commands::Solve {
            problem,
            concepts,
            improvement,
        } => {
            let mut store = open_store(config)?;
            let lab = load_lab(config, &store)?;
            let selected: Vec<String> = if concepts.is_empty() {
                lab.user_concepts().iter().map(|c| c.id.clone()).collect()
            } else {
                concepts
            };

            let solution = lab.solve(&analyzer, &problem, &selected, rng.as_mut());

            if let Some(improvement) = improvement {
                let now = Utc::now();
                let state = storage::load_metrics(&store, now)?;
                let mut tracker = MetricsTracker::with_state(config, state);
                if tracker.record_problem_solving_test(&problem, improvement, selected, now) {
                    storage::save_metrics(&mut store, tracker.state())?;
                }
            }
            print_json(&solution)
        }
        Commands::Seeds => print_json(&seed_concepts(Utc::now())),
        Commands::Metrics { reset } => {
            let mut store = open_store(config)?;
            let now = Utc::now();
            let mut tracker =
                MetricsTracker::with_state(config, storage::load_metrics(&store, now)?);

            if reset {
                tracker.reset(now);
                storage::save_metrics(&mut store, tracker.state())?;
                info!("Metrics reset");
            }
            print_json(&tracker.report(now))
        }
    }
}

fn open_store(config: &LabConfig) -> Result<FileStore> {
    let paths = LabPaths::from_config(config);
    FileStore::open(&paths)
        .with_context(|| format!("Failed to open store under {:?}", paths.data_dir()))
}

fn load_lab(config: &LabConfig, store: &FileStore) -> Result<LabState> {
    let concepts = storage::load_user_concepts(store)?;
    Ok(LabState::new(config, Utc::now()).with_user_concepts(concepts))
}

fn place_elements(lab: &mut LabState, constraint: ConstraintCategory, kinds: &[ElementKind]) {
    lab.select_constraint(constraint);
    for kind in kinds {
        lab.add_element(*kind);
    }
}

/// Saves the user concepts and records `created` in the metrics.
fn persist(
    config: &LabConfig,
    store: &mut FileStore,
    lab: &LabState,
    created: &[linguistic_lab::Concept],
) -> Result<()> {
    let now = Utc::now();
    storage::save_user_concepts(store, lab.user_concepts())?;

    let mut tracker = MetricsTracker::with_state(config, storage::load_metrics(&*store, now)?);
    for concept in created {
        tracker.record_concept(concept, now);
    }
    storage::save_metrics(store, tracker.state())?;

    info!(saved = created.len(), total = lab.user_concepts().len(), "Persisted concepts");
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
