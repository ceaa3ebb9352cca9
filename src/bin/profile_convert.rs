use anyhow::Context;
use clap::Parser;
use radioref_sdruno::core::ConfigProvider;
use radioref_sdruno::utils::{logger, validation::Validate};
use radioref_sdruno::{CsvPipeline, EtlEngine, LocalStorage, ProfileConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "profile-convert")]
#[command(about = "Convert a RadioReference export using a TOML conversion profile")]
struct Args {
    /// Path to the TOML conversion profile
    #[arg(short, long, default_value = "sdruno-profile.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only keep Ham-tagged rows, whatever the profile says
    #[arg(long)]
    ham_only: bool,

    /// Append callsigns, whatever the profile says
    #[arg(long)]
    add_callsign: bool,

    /// Show what would be converted without writing the output
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading profile from: {}", args.config);

    let mut profile = ProfileConfig::from_file(&args.config)
        .with_context(|| format!("failed to load profile '{}'", args.config))?;

    if args.ham_only {
        profile.filter.ham_only = true;
        tracing::info!("Ham-only filter enabled from the command line");
    }
    if args.add_callsign {
        profile.transform.add_callsign = true;
        tracing::info!("Callsign suffix enabled from the command line");
    }

    // Relative paths in a profile are relative to the profile file.
    if let Some(base_dir) = Path::new(&args.config).parent() {
        profile.resolve_paths(base_dir);
    }

    profile.validate().context("invalid profile")?;
    display_profile_summary(&profile);

    let engine = EtlEngine::new(CsvPipeline::new(LocalStorage::default(), profile));

    let report = if args.dry_run {
        tracing::info!("DRY RUN MODE - the output file will not be written");
        engine.dry_run()
    } else {
        engine.run()
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    println!("Total rows read: {}", report.summary.rows_read);
    match report.output_path {
        Some(path) => println!("Rows written to '{}': {}", path, report.summary.rows_written),
        None => println!("Rows that would be written: {}", report.summary.rows_written),
    }

    Ok(())
}

fn display_profile_summary(profile: &ProfileConfig) {
    let options = profile.convert_options();
    tracing::info!("Input: {}", profile.input_path.display());
    tracing::info!("Output: {}", profile.output_path.display());
    tracing::info!("Modulations: {}", options.describe_modulations());
    tracing::info!(
        "Ham only: {}, add callsign: {}",
        options.ham_only,
        options.add_callsign
    );
}
