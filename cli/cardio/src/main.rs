use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cardio_report::{generate, render, write_rationale_text, RenderOptions, ReportFormat};
use cardio_risk::{ClinicalInputs, RoundingPolicy, Sex};
use cardio_types::{ClinicalRanges, Validatable, ValidationError};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

pub mod batch;
pub mod config;

use batch::BatchSettings;
use config::{load_config, CardioConfig, CONFIG_FILE};

#[derive(Debug, Parser)]
#[command(
    name = "cardio",
    version,
    about = "Visceral Adiposity Index and metabolic-age calculator",
    long_about = "cardio computes the sex-specific Visceral Adiposity Index (VAI) and a\n\
        metabolic age from routine clinical measurements, flagging hidden\n\
        cardio-metabolic risk such as the MONW (metabolically obese, normal\n\
        weight) phenotype.\n\n\
        EXAMPLES:\n\
        \n  cardio assess --sex female --age 30 --bmi 22 --waist 85 --tg 1.5 --hdl 1.1\n\
        \n  cardio assess --sex male --age 52 --bmi 30 --waist 110 --tg 2.5 --hdl 0.9 --lpa 120 --format json\n\
        \n  cardio batch patients.ndjson > results.ndjson\n\
        \n  cardio explain                             Show clinical rationale and references",
    after_help = "Units: BMI kg/m², waist cm, triglycerides and HDL mmol/L, Lp(a) mg/dL."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./cardio.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a risk analysis for one set of measurements
    Assess(AssessArgs),

    /// Assess a JSON array or NDJSON stream of records, one JSON result per line
    #[command(
        long_about = "Reads clinical input records from FILE (or stdin) and writes one JSON\n\
            line per record: {\"index\":N,\"assessment\":{...}} or {\"index\":N,\"error\":\"...\"}.\n\n\
            Exit status is 0 when every record succeeded and 1 otherwise."
    )]
    Batch(BatchArgs),

    /// Print the clinical rationale and peer-reviewed references
    Explain,

    /// Write a default cardio.toml (or the --config path)
    Init(InitArgs),

    /// Validate the configuration file without assessing anything
    Check,
}

#[derive(Debug, Args, Clone)]
struct AssessArgs {
    /// Biological sex (male or female)
    #[arg(long)]
    sex: Sex,

    /// Chronological age in years (18-95)
    #[arg(long)]
    age: u32,

    /// Body mass index in kg/m² (15-45)
    #[arg(long)]
    bmi: f64,

    /// Waist circumference in cm (60-150)
    #[arg(long, visible_alias = "wc")]
    waist: f64,

    /// Triglycerides in mmol/L (0.5-10)
    #[arg(long, visible_alias = "triglycerides")]
    tg: f64,

    /// HDL cholesterol in mmol/L (0.5-3.5)
    #[arg(long)]
    hdl: f64,

    /// Lipoprotein(a) in mg/dL (0-300, optional)
    #[arg(long)]
    lpa: Option<f64>,

    /// Output format (text, markdown, json); overrides the config file
    #[arg(long, value_name = "FORMAT")]
    format: Option<ReportFormat>,

    /// Append the clinical rationale and references
    #[arg(long)]
    rationale: bool,

    /// Rounding policy (half-away-from-zero, half-even); overrides the config file
    #[arg(long, value_name = "POLICY")]
    rounding: Option<RoundingPolicy>,
}

#[derive(Debug, Args, Clone)]
struct BatchArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Rounding policy; overrides the config file
    #[arg(long, value_name = "POLICY")]
    rounding: Option<RoundingPolicy>,
}

#[derive(Debug, Args, Clone)]
struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `-v` sets the baseline; `RUST_LOG` still wins when set.
fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn load_or_report(path: Option<&Path>) -> Result<CardioConfig, i32> {
    load_config(path).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

/// Declared ranges are checked on construction, site ranges afterwards.
fn build_inputs(
    args: &AssessArgs,
    ranges: &ClinicalRanges,
) -> Result<ClinicalInputs, ValidationError> {
    let mut inputs =
        ClinicalInputs::new(args.sex, args.age, args.bmi, args.waist, args.tg, args.hdl)?;
    if let Some(lpa) = args.lpa {
        inputs = inputs.with_lipoprotein_a(lpa)?;
    }
    inputs.validate_with_ctx(ranges)?;
    Ok(inputs)
}

fn run_assess(args: &AssessArgs, config: &CardioConfig) -> i32 {
    let inputs = match build_inputs(args, &config.ranges.clinical_ranges()) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let rounding = args.rounding.unwrap_or(config.assessment.rounding);
    let report = match generate(&config.report.profile(), &inputs, rounding) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let options = RenderOptions {
        format: args.format.unwrap_or(config.report.format),
        include_rationale: args.rationale || config.report.rationale,
    };
    match render(&report, options) {
        Ok(text) => {
            print!("{text}");
            if options.format == ReportFormat::Json {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn read_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_batch(args: &BatchArgs, config: &CardioConfig) -> i32 {
    let text = match read_input(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let settings = BatchSettings {
        ranges: config.ranges.clinical_ranges(),
        rounding: args.rounding.unwrap_or(config.assessment.rounding),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match batch::run_batch(&text, &settings, &mut out) {
        Ok(summary) => {
            log::info!(
                "batch finished: {} succeeded, {} failed",
                summary.succeeded,
                summary.failed
            );
            if summary.failed == 0 {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_explain() -> i32 {
    let mut out = String::new();
    if let Err(e) = write_rationale_text(&mut out) {
        eprintln!("error: {e}");
        return 1;
    }
    print!("{out}");
    0
}

fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

fn run_init(args: &InitArgs, explicit: Option<&Path>) -> i32 {
    let path = config_path(explicit);
    if path.exists() && !args.force {
        eprintln!(
            "error: '{}' already exists (use --force to overwrite)",
            path.display()
        );
        return 1;
    }
    if let Err(e) = fs::write(&path, config::generate_default_config()) {
        eprintln!("error: failed to write '{}': {e}", path.display());
        return 1;
    }
    println!("✓ Created {}", path.display());
    0
}

fn run_check(explicit: Option<&Path>) -> i32 {
    let path = config_path(explicit);
    if !path.exists() {
        eprintln!(
            "error: '{}' not found (run 'cardio init')",
            path.display()
        );
        return 1;
    }
    match config::read_config(&path) {
        Ok(config) => {
            log::info!("loaded {}: {config}", path.display());
            println!("✓ {} is valid", path.display());
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Assess(args) => match load_or_report(cli.config.as_deref()) {
            Ok(config) => run_assess(args, &config),
            Err(rc) => rc,
        },
        Command::Batch(args) => match load_or_report(cli.config.as_deref()) {
            Ok(config) => run_batch(args, &config),
            Err(rc) => rc,
        },
        Command::Explain => run_explain(),
        Command::Init(args) => run_init(args, cli.config.as_deref()),
        Command::Check => run_check(cli.config.as_deref()),
    }
}

fn main() {
    std::process::exit(run_cli());
}
