use clap::Parser;
use radioref_sdruno::config::LogFormat;
use radioref_sdruno::core::ConfigProvider;
use radioref_sdruno::utils::{logger, validation::Validate};
use radioref_sdruno::{CliConfig, CsvPipeline, EtlEngine, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let options = config.convert_options();
    let input = config.input.display().to_string();
    let output = config.output.display().to_string();
    let dry_run = config.dry_run;

    println!("Starting conversion of '{}'...", input);
    println!(
        "Including only these modulation types: {}",
        options.describe_modulations()
    );
    if options.ham_only {
        println!("Keeping only Ham-tagged rows");
    }

    let pipeline = CsvPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    let outcome = if dry_run {
        engine.dry_run()
    } else {
        engine.run()
    };

    match outcome {
        Ok(report) => {
            let summary = report.summary;
            println!();
            println!("--- Conversion Complete ---");
            println!("Total rows read: {}", summary.rows_read);
            match report.output_path {
                Some(path) => println!("Rows written to '{}': {}", path, summary.rows_written),
                None => println!(
                    "Dry run, nothing written to '{}': {} rows would be written",
                    output, summary.rows_written
                ),
            }
            if summary.conversion_errors > 0 {
                println!("Rows skipped due to data errors: {}", summary.conversion_errors);
            }
            if summary.unrecognized_kept > 0 {
                println!(
                    "Rows with unrecognized modes written as FM: {}",
                    summary.unrecognized_kept
                );
            }
        }
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
    }
}
