pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ProfileConfig;

pub use adapters::storage::LocalStorage;
pub use self::core::{
    etl::{EtlEngine, RunReport},
    pipeline::CsvPipeline,
};
pub use domain::model::{ConvertOptions, Modulation, RunSummary, StandardMode};
pub use utils::error::{ConverterError, Result, RowConversionError};
