#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
pub use profile::ProfileConfig;
