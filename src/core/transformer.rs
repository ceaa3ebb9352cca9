//! Row-level conversion from a RadioReference record to an SDRuno memory row.

use crate::domain::model::{
    ConvertOptions, FilterColumn, InputRecord, ModeColumn, OutputRecord, StandardMode,
    FIELD_CALLSIGN, FIELD_DESCRIPTION, FIELD_FREQUENCY, FIELD_MODE, FIELD_TAG,
};
use crate::utils::error::RowConversionError;

const HAM_TAG: &str = "Ham";
const HZ_PER_MHZ: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotHamTagged,
    ModulationNotAllowed(StandardMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Kept {
        record: OutputRecord,
        /// The mode was not recognized and the row fell into the FM/NFM bucket.
        unrecognized_mode: bool,
    },
    Skipped(SkipReason),
}

/// Decide whether `record` is kept and build its output row.
///
/// Filters run before the frequency is parsed, so a row dropped by the tag or
/// modulation filter never reports a conversion error.
pub fn transform_row(
    record: &InputRecord,
    options: &ConvertOptions,
) -> Result<RowOutcome, RowConversionError> {
    let mode = StandardMode::from_raw(record.get(FIELD_MODE).unwrap_or_default());

    if options.ham_only && !is_ham_tagged(record.get(FIELD_TAG)) {
        return Ok(RowOutcome::Skipped(SkipReason::NotHamTagged));
    }

    if !options.allows(mode) {
        return Ok(RowOutcome::Skipped(SkipReason::ModulationNotAllowed(mode)));
    }

    let frequency_hz = parse_frequency_hz(record.get(FIELD_FREQUENCY))?;
    let name = compose_name(
        record.get(FIELD_DESCRIPTION),
        record.get(FIELD_CALLSIGN),
        options.add_callsign,
    );
    let (mode_column, filter_column) = columns_for(mode);

    Ok(RowOutcome::Kept {
        record: OutputRecord {
            frequency_hz,
            mode: mode_column,
            name,
            filter: filter_column,
        },
        unrecognized_mode: mode == StandardMode::Unrecognized,
    })
}

pub fn is_ham_tagged(tag: Option<&str>) -> bool {
    tag.is_some_and(|t| t.contains(HAM_TAG))
}

/// Parse a megahertz value into whole hertz.
pub fn parse_frequency_hz(raw: Option<&str>) -> Result<u64, RowConversionError> {
    let value = raw.ok_or(RowConversionError::Missing)?.trim();
    if value.is_empty() {
        return Err(RowConversionError::Empty);
    }

    let mhz: f64 = value.parse().map_err(|source| RowConversionError::Invalid {
        value: value.to_string(),
        source,
    })?;

    let hz = (mhz * HZ_PER_MHZ).round();
    if !hz.is_finite() || hz < 0.0 || hz >= u64::MAX as f64 {
        return Err(RowConversionError::OutOfRange {
            value: value.to_string(),
        });
    }

    Ok(hz as u64)
}

pub fn compose_name(
    description: Option<&str>,
    callsign: Option<&str>,
    add_callsign: bool,
) -> String {
    let mut name = description.unwrap_or_default().to_string();
    if add_callsign {
        if let Some(callsign) = callsign.map(str::trim).filter(|c| !c.is_empty()) {
            name.push(' ');
            name.push_str(callsign);
        }
    }
    name
}

fn columns_for(mode: StandardMode) -> (ModeColumn, FilterColumn) {
    match mode {
        StandardMode::Am => (ModeColumn::Am, FilterColumn::Am),
        StandardMode::Fm | StandardMode::Nfm | StandardMode::Unrecognized => {
            (ModeColumn::Fm, FilterColumn::Nfm)
        }
    }
}
