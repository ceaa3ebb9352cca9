use crate::core::transformer::{transform_row, RowOutcome, SkipReason};
use crate::core::{ConfigProvider, InputRecord, Pipeline, Storage, TransformResult};
use crate::domain::model::{ConvertOptions, RunSummary, FIELD_MODE};
use crate::utils::error::{ConverterError, Result};
use std::collections::HashMap;

/// Reads a RadioReference CSV export and writes SDRuno memory rows.
pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    options: ConvertOptions,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let options = config.convert_options();
        Self {
            storage,
            config,
            options,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    fn check_input(&self) -> Result<()> {
        let input = self.config.input_path();
        if !self.storage.exists(input) {
            return Err(ConverterError::InputNotFound {
                path: input.display().to_string(),
            });
        }
        Ok(())
    }

    fn extract(&self) -> Result<Vec<InputRecord>> {
        let input = self.config.input_path();
        tracing::debug!("Reading export from: {}", input.display());
        let bytes = self.storage.read_file(input)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers = reader.headers()?.clone();
        tracing::debug!("Export columns: {:?}", headers);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let data: HashMap<String, String> = headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect();
            records.push(InputRecord::new(data));
        }

        Ok(records)
    }

    fn transform(&self, data: Vec<InputRecord>) -> Result<TransformResult> {
        let mut summary = RunSummary::default();
        let mut records = Vec::new();

        for (index, input) in data.iter().enumerate() {
            let row_number = index + 1;
            summary.rows_read += 1;

            match transform_row(input, &self.options) {
                Ok(RowOutcome::Kept {
                    record,
                    unrecognized_mode,
                }) => {
                    if unrecognized_mode {
                        summary.unrecognized_kept += 1;
                        tracing::warn!(
                            "Data row {}: unrecognized mode {:?}, writing as FM/NFM",
                            row_number,
                            input.get(FIELD_MODE).unwrap_or_default()
                        );
                    }
                    records.push(record);
                }
                Ok(RowOutcome::Skipped(SkipReason::NotHamTagged)) => {
                    summary.skipped_not_ham += 1;
                }
                Ok(RowOutcome::Skipped(SkipReason::ModulationNotAllowed(mode))) => {
                    summary.skipped_modulation += 1;
                    tracing::debug!("Data row {}: mode {} not allowed", row_number, mode);
                }
                Err(e) => {
                    summary.conversion_errors += 1;
                    tracing::warn!("Skipping data row {} due to data error: {}", row_number, e);
                }
            }
        }

        tracing::debug!(
            "Kept {} of {} rows ({} not ham, {} modulation, {} data errors)",
            records.len(),
            summary.rows_read,
            summary.skipped_not_ham,
            summary.skipped_modulation,
            summary.conversion_errors
        );

        Ok(TransformResult { records, summary })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let output = self.config.output_path();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        for record in &result.records {
            writer.write_record(record.to_row())?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| ConverterError::IoError(e.into_error()))?;

        tracing::debug!("Writing {} bytes to {}", data.len(), output.display());
        self.storage.write_file(output, &data)?;

        Ok(output.display().to_string())
    }
}
