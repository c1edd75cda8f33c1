//! Command line entry point for the RPI engine
//!
//! Loads a roster file, resolves a coefficient set from the configured sport
//! profile (or an explicit `[coefficients]` table), ranks the roster and
//! prints the result.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rpi_engine::config::{AppConfig, CoefficientProvider, StaticCoefficientProvider};
use rpi_engine::rating::{RankingReport, RatingCalculator, RpiCalculator};
use rpi_engine::roster::RosterFile;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// RPI Engine - strength-of-schedule rankings for competing teams
#[derive(Parser)]
#[command(
    name = "rpi-engine",
    version,
    about = "Rank teams by Rating Percentage Index",
    long_about = "Ranks a roster of teams by a Rating Percentage Index built from each team's \
                 level-adjusted win percentage, its opponents' and its opponents' opponents' \
                 win percentages, and optional score-margin terms, using per-sport coefficients."
)]
struct Args {
    /// Roster file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to the roster file (JSON with `teams` and/or `results`)"
    )]
    schedule: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Sport override
    #[arg(long, value_name = "SPORT", help = "Sport profile used for default coefficients")]
    sport: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Suggest coefficients for a team
    #[arg(long, value_name = "TEAM_ID", help = "Print a coefficient set tuned to this team")]
    suggest: Option<String>,

    /// List sport profiles and exit
    #[arg(long, help = "List the built-in sport profiles and exit")]
    list_sports: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without ranking")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(sport) = &args.sport {
        config.engine.sport = sport.clone();
    }

    rpi_engine::config::validate_config(&config)?;
    Ok(config)
}

fn print_sports(provider: &dyn CoefficientProvider) {
    for sport in provider.available_sports() {
        if let Some(profile) = provider.profile(&sport) {
            let c = &profile.coefficients;
            println!(
                "{:<12} {:<12} clwp={:.2} oclwp={:.2} ooclwp={:.2} diff={:.2} dom={:.2} min_games={} diff_interval={}",
                profile.id,
                profile.display_name,
                c.clwp_coeff,
                c.oclwp_coeff,
                c.ooclwp_coeff,
                c.diff_coeff,
                c.domination_coeff,
                c.min_games,
                c.diff_interval
            );
        }
    }
}

fn print_table(report: &RankingReport) {
    println!(
        "{:>4}  {:<24} {:>3} {:>3} {:>3} {:>3}  {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}  {:>7}",
        "Rank", "Team", "G", "W", "L", "T", "WP", "CLWP", "OCLWP", "OOCLWP", "DIFF", "DOM", "RPI"
    );
    for result in &report.results {
        println!(
            "{:>4}  {:<24} {:>3} {:>3} {:>3} {:>3}  {:>6.4} {:>6.4} {:>6.4} {:>6.4} {:>6.3} {:>6.4}  {:>7.5}{}",
            result.rank,
            result.team_name,
            result.games,
            result.wins,
            result.losses,
            result.ties,
            result.wp,
            result.clwp,
            result.oclwp,
            result.ooclwp,
            result.diff,
            result.domination,
            result.rpi,
            if result.reliable { "" } else { " *" }
        );
    }

    if report.results.iter().any(|r| !r.reliable) {
        println!(
            "* fewer than {} counted games",
            report.coefficients.min_games
        );
    }
    for issue in &report.issues {
        println!("skipped: {}", issue);
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let provider = StaticCoefficientProvider::new();

    if args.list_sports {
        print_sports(&provider);
        return Ok(());
    }

    let coefficients = config.resolve_coefficients(&provider)?;
    info!("Using '{}' coefficients", coefficients.name);

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let Some(schedule_path) = &args.schedule else {
        return Err(anyhow::anyhow!(
            "--schedule is required unless --list-sports or --dry-run is given"
        ));
    };

    info!("Loading roster from: {}", schedule_path.display());
    let teams = RosterFile::from_path(schedule_path)?.into_teams();

    let calculator = RpiCalculator::with_parallel_threshold(config.engine.parallel_threshold);
    let report = calculator.calculate(&teams, &coefficients)?;

    if !report.issues.is_empty() {
        warn!("{} input records were skipped", report.issues.len());
    }

    match args.format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(team_id) = &args.suggest {
        let suggestion = report.suggest_for(team_id)?;
        match args.format {
            OutputFormat::Table => println!("\n{}", toml::to_string_pretty(&suggestion)?),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestion)?),
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config) {
        error!("Ranking failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
