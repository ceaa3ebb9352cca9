//! Conversion profiles: a whole run described in one TOML file.
//!
//! ```toml
//! [input]
//! path = "ctid_1855.csv"
//!
//! [output]
//! path = "${HOME}/sdruno/converted_output.csv"
//!
//! [filter]
//! modulations = ["AM", "FM", "NFM"]
//! ham_only = false
//!
//! [transform]
//! add_callsign = false
//! ```

use crate::core::ConfigProvider;
use crate::domain::model::{ConvertOptions, Modulation};
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_path, validate_required_field, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    input: Option<PathSection>,
    output: Option<PathSection>,
    #[serde(default)]
    filter: FilterSection,
    #[serde(default)]
    transform: TransformSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// An empty list turns modulation filtering off.
    #[serde(default = "default_modulations")]
    pub modulations: Vec<Modulation>,
    #[serde(default)]
    pub ham_only: bool,
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            modulations: default_modulations(),
            ham_only: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformSection {
    #[serde(default)]
    pub add_callsign: bool,
}

fn default_modulations() -> Vec<Modulation> {
    Modulation::ALL.to_vec()
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub filter: FilterSection,
    pub transform: TransformSection,
}

impl ProfileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let raw: RawProfile =
            toml::from_str(&processed_content).map_err(|e| ConverterError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        let input = raw.input.unwrap_or_default();
        let output = raw.output.unwrap_or_default();

        Ok(Self {
            input_path: validate_required_field("input.path", &input.path)?.clone(),
            output_path: validate_required_field("output.path", &output.path)?.clone(),
            filter: raw.filter,
            transform: raw.transform,
        })
    }

    /// Anchor relative input and output paths at `base`, usually the profile's directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.input_path = base.join(&self.input_path);
        self.output_path = base.join(&self.output_path);
    }
}

/// Replace `${VAR}` with the environment value; unset variables stay as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConverterError::ConfigValidationError {
        field: "environment".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl ConfigProvider for ProfileConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            allowed_modulations: self.filter.modulations.iter().copied().collect(),
            ham_only: self.filter.ham_only,
            add_callsign: self.transform.add_callsign,
        }
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}
