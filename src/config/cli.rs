use crate::core::ConfigProvider;
use crate::domain::model::{ConvertOptions, Modulation};
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use clap::{Parser, ValueEnum};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "radioref-sdruno")]
#[command(version, about = "Convert a RadioReference CSV export into SDRuno memory rows")]
pub struct CliConfig {
    /// RadioReference CSV export to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// SDRuno memory file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Modulations to keep; FMN rows count as NFM, WFM rows as FM
    #[arg(
        short,
        long = "modulation",
        value_enum,
        value_delimiter = ',',
        ignore_case = true,
        default_values_t = Modulation::ALL,
        conflicts_with = "all_modes"
    )]
    pub modulations: Vec<Modulation>,

    /// Keep every row regardless of mode; unknown modes are written as FM
    #[arg(long)]
    pub all_modes: bool,

    /// Only keep rows whose Tag mentions Ham
    #[arg(long)]
    pub ham_only: bool,

    /// Append the FCC callsign to the description
    #[arg(long)]
    pub add_callsign: bool,

    /// Convert without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn convert_options(&self) -> ConvertOptions {
        let allowed_modulations: BTreeSet<Modulation> = if self.all_modes {
            BTreeSet::new()
        } else {
            self.modulations.iter().copied().collect()
        };

        ConvertOptions {
            allowed_modulations,
            ham_only: self.ham_only,
            add_callsign: self.add_callsign,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths(&self.input, &self.output)
    }
}
