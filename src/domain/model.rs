use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

pub const FIELD_FREQUENCY: &str = "Frequency Output";
pub const FIELD_MODE: &str = "Mode";
pub const FIELD_DESCRIPTION: &str = "Description";
pub const FIELD_TAG: &str = "Tag";
pub const FIELD_CALLSIGN: &str = "FCC Callsign";

pub const STORE_FLAG: &str = "Y";
pub const BANDWIDTH: &str = "12K";
pub const ANTENNA: &str = "AntA";

/// One row of a RadioReference export, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    pub data: HashMap<String, String>,
}

impl InputRecord {
    pub fn new(data: HashMap<String, String>) -> Self {
        Self { data }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }
}

/// Modulations a user can ask to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum Modulation {
    #[serde(alias = "am")]
    Am,
    #[serde(alias = "fm")]
    Fm,
    #[serde(alias = "nfm")]
    Nfm,
}

impl Modulation {
    pub const ALL: [Modulation; 3] = [Modulation::Am, Modulation::Fm, Modulation::Nfm];

    pub fn as_str(self) -> &'static str {
        match self {
            Modulation::Am => "AM",
            Modulation::Fm => "FM",
            Modulation::Nfm => "NFM",
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized form of the export's `Mode` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardMode {
    Am,
    Fm,
    Nfm,
    Unrecognized,
}

impl StandardMode {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "FM" | "WFM" => StandardMode::Fm,
            "FMN" => StandardMode::Nfm,
            "AM" => StandardMode::Am,
            _ => StandardMode::Unrecognized,
        }
    }

    pub fn modulation(self) -> Option<Modulation> {
        match self {
            StandardMode::Am => Some(Modulation::Am),
            StandardMode::Fm => Some(Modulation::Fm),
            StandardMode::Nfm => Some(Modulation::Nfm),
            StandardMode::Unrecognized => None,
        }
    }
}

impl fmt::Display for StandardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modulation() {
            Some(modulation) => f.write_str(modulation.as_str()),
            None => f.write_str("UNRECOGNIZED"),
        }
    }
}

/// Per-run conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Empty means no modulation filtering at all.
    pub allowed_modulations: BTreeSet<Modulation>,
    pub ham_only: bool,
    pub add_callsign: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            allowed_modulations: Modulation::ALL.into_iter().collect(),
            ham_only: false,
            add_callsign: false,
        }
    }
}

impl ConvertOptions {
    pub fn filters_modulation(&self) -> bool {
        !self.allowed_modulations.is_empty()
    }

    pub fn allows(&self, mode: StandardMode) -> bool {
        if !self.filters_modulation() {
            return true;
        }
        mode.modulation().is_some_and(|m| self.allowed_modulations.contains(&m))
    }

    pub fn describe_modulations(&self) -> String {
        if !self.filters_modulation() {
            return "all (no modulation filter)".to_string();
        }
        self.allowed_modulations
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeColumn {
    Am,
    Fm,
}

impl ModeColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            ModeColumn::Am => "AM",
            ModeColumn::Fm => "FM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Am,
    Nfm,
}

impl FilterColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterColumn::Am => "AM",
            FilterColumn::Nfm => "NFM",
        }
    }
}

/// One SDRuno memory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub frequency_hz: u64,
    pub mode: ModeColumn,
    pub name: String,
    pub filter: FilterColumn,
}

impl OutputRecord {
    /// The nine positional columns in file order.
    pub fn to_row(&self) -> [String; 9] {
        [
            self.frequency_hz.to_string(),
            STORE_FLAG.to_string(),
            self.mode.as_str().to_string(),
            self.name.clone(),
            String::new(),
            self.filter.as_str().to_string(),
            BANDWIDTH.to_string(),
            ANTENNA.to_string(),
            String::new(),
        ]
    }
}

/// Counters for one conversion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_written: usize,
    pub skipped_not_ham: usize,
    pub skipped_modulation: usize,
    pub conversion_errors: usize,
    /// Rows written in the FM/NFM bucket because their mode was not recognized.
    pub unrecognized_kept: usize,
}

impl RunSummary {
    pub fn rows_skipped(&self) -> usize {
        self.skipped_not_ham + self.skipped_modulation + self.conversion_errors
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<OutputRecord>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_mode_mapping() {
        assert_eq!(StandardMode::from_raw("FM"), StandardMode::Fm);
        assert_eq!(StandardMode::from_raw("WFM"), StandardMode::Fm);
        assert_eq!(StandardMode::from_raw("FMN"), StandardMode::Nfm);
        assert_eq!(StandardMode::from_raw("AM"), StandardMode::Am);
        assert_eq!(StandardMode::from_raw(" FMN "), StandardMode::Nfm);
    }

    #[test]
    fn test_unknown_modes_are_unrecognized() {
        for raw in ["", "WX", "NFM", "fm", "P25", "DMR", "CW"] {
            assert_eq!(
                StandardMode::from_raw(raw),
                StandardMode::Unrecognized,
                "mode {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_standard_mode_display() {
        assert_eq!(StandardMode::Nfm.to_string(), "NFM");
        assert_eq!(StandardMode::Unrecognized.to_string(), "UNRECOGNIZED");
    }

    #[test]
    fn test_default_options_allow_all_recognized_modes() {
        let options = ConvertOptions::default();
        assert!(options.allows(StandardMode::Am));
        assert!(options.allows(StandardMode::Fm));
        assert!(options.allows(StandardMode::Nfm));
        assert!(!options.allows(StandardMode::Unrecognized));
        assert_eq!(options.describe_modulations(), "AM, FM, NFM");
    }

    #[test]
    fn test_empty_modulation_set_allows_everything() {
        let options = ConvertOptions {
            allowed_modulations: BTreeSet::new(),
            ..ConvertOptions::default()
        };
        assert!(!options.filters_modulation());
        assert!(options.allows(StandardMode::Unrecognized));
    }

    #[test]
    fn test_output_row_layout() {
        let record = OutputRecord {
            frequency_hz: 121_500_000,
            mode: ModeColumn::Am,
            name: "Guard".to_string(),
            filter: FilterColumn::Am,
        };
        assert_eq!(
            record.to_row(),
            ["121500000", "Y", "AM", "Guard", "", "AM", "12K", "AntA", ""]
        );
    }

    #[test]
    fn test_modulation_deserializes_from_either_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            modulations: Vec<Modulation>,
        }
        let parsed: Wrapper = toml::from_str(r#"modulations = ["AM", "nfm"]"#).unwrap();
        assert_eq!(parsed.modulations, vec![Modulation::Am, Modulation::Nfm]);
    }
}
