//! # pilecap
//!
//! Command-line front end for `pilecap_core`.
//!
//! ```text
//! pilecap calc cap.json                     # full report
//! pilecap calc cap.json --step 3            # flexure step only
//! pilecap calc cap.json --format json       # PileCapResult as JSON
//! pilecap example > cap.json                # reference input
//! pilecap standards --standards tables.toml # list the active tables
//! pilecap equations > EQUATIONS.md
//! ```
//!
//! Failed design checks are printed as warnings and still exit with 0.
//! Logs go to stderr; set `RUST_LOG=pilecap_core=debug` for stage details.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pilecap_core::calculations::compute_design_with_settings;
use pilecap_core::equations::generate_equations_markdown;
use pilecap_core::report::{render_report, render_step, ReportStep};
use pilecap_core::{CalcError, DesignSettings, PileCapInput, Standards};

#[derive(Parser, Debug)]
#[command(name = "pilecap", version, about = "Two-pile cap design (Thai TIS tables, ACI 318)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design a pile cap from a JSON input file
    Calc(CalcArgs),

    /// Print the reference input as JSON
    Example,

    /// List steel grades, concrete grades and bar sizes
    Standards {
        /// Custom standards tables (TOML)
        #[arg(long, short = 's')]
        standards: Option<PathBuf>,
    },

    /// Print the equation reference (Markdown)
    Equations,
}

#[derive(clap::Args, Debug)]
struct CalcArgs {
    /// Input file (JSON)
    input: PathBuf,

    /// Custom standards tables (TOML)
    #[arg(long, short = 's')]
    standards: Option<PathBuf>,

    /// Design settings (TOML)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a single report step (1-4)
    #[arg(long)]
    step: Option<u8>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pilecap=info,pilecap_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(args) => calc(&args),
        Command::Example => {
            println!("{}", serde_json::to_string_pretty(&PileCapInput::reference())?);
            Ok(())
        }
        Command::Standards { standards } => {
            let standards = load_standards(standards.as_deref())?;
            print_standards(&standards);
            Ok(())
        }
        Command::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
    }
}

fn calc(args: &CalcArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let input: PileCapInput = serde_json::from_str(&source)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let standards = load_standards(args.standards.as_deref())?;
    let settings = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            DesignSettings::from_toml_str(&text).map_err(|e| core_error(e, path))?
        }
        None => DesignSettings::default(),
    };

    let step = match args.step {
        Some(n) => match ReportStep::from_number(n) {
            Some(step) => Some(step),
            None => bail!("--step must be between 1 and {}, got {}", ReportStep::ALL.len(), n),
        },
        None => None,
    };

    info!(label = %input.label, "designing pile cap");
    let result = compute_design_with_settings(
        &input,
        &standards.steel,
        &standards.concrete,
        &standards.bars,
        &settings,
    )
    .map_err(|e| core_error(e, &args.input))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => match step {
            Some(step) => print!("{}", render_step(step, &input, &result)),
            None => print!("{}", render_report(&input, &result)),
        },
    }

    if result.passes() {
        info!("all checks OK");
    } else {
        warn!(count = result.warnings.len(), "design has failed checks");
    }
    Ok(())
}

fn load_standards(path: Option<&Path>) -> Result<Standards> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Standards::from_toml_str(&text).map_err(|e| core_error(e, path))
        }
        None => Ok(Standards::thai_tis().clone()),
    }
}

/// Print the structured error for tooling, then wrap it for the exit message.
fn core_error(err: CalcError, path: &Path) -> anyhow::Error {
    if let Ok(json) = serde_json::to_string_pretty(&err) {
        eprintln!("{}", json);
    }
    anyhow::Error::new(err).context(format!("design aborted for {}", path.display()))
}

fn print_standards(standards: &Standards) {
    println!("Steel grades:");
    for grade in &standards.steel.grades {
        println!("  {:<8} fy  = {:>6.1} MPa  {}", grade.code, grade.fy_mpa, grade.description);
    }

    println!();
    println!("Concrete grades:");
    for grade in &standards.concrete.grades {
        println!("  {:<8} fc' = {:>6.1} MPa  {}", grade.code, grade.fc_mpa, grade.description);
    }
    println!(
        "  γc = {:.1} kN/m³, Ec = {:.0}√fc' MPa",
        standards.concrete.properties.unit_weight_kn_m3,
        standards.concrete.properties.elastic_modulus_factor
    );

    println!();
    println!("Bar sizes:");
    for bar in &standards.bars.sizes {
        println!(
            "  DB{:<3} A = {:>6.1} mm²  w = {:.3} kg/m",
            bar.diameter_mm, bar.area_mm2, bar.unit_weight_kg_m
        );
    }
}
