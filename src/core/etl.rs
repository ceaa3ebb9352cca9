use crate::core::{Pipeline, TransformResult};
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    /// `None` for dry runs.
    pub output_path: Option<String>,
    pub summary: RunSummary,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<RunReport> {
        let result = self.extract_and_transform()?;

        tracing::info!("Writing {} rows...", result.records.len());
        let output_path = self.pipeline.load(&result)?;

        let mut summary = result.summary;
        summary.rows_written = result.records.len();
        tracing::info!("Rows written to '{}': {}", output_path, summary.rows_written);

        Ok(RunReport {
            output_path: Some(output_path),
            summary,
        })
    }

    /// Everything `run` does except writing the output file.
    pub fn dry_run(&self) -> Result<RunReport> {
        let result = self.extract_and_transform()?;

        let mut summary = result.summary;
        summary.rows_written = result.records.len();
        tracing::info!("Dry run: {} rows would be written", summary.rows_written);

        Ok(RunReport {
            output_path: None,
            summary,
        })
    }

    fn extract_and_transform(&self) -> Result<TransformResult> {
        self.pipeline.check_input()?;

        tracing::info!("Extracting rows...");
        let raw_data = self.pipeline.extract()?;
        tracing::debug!("Extracted {} rows", raw_data.len());

        tracing::info!("Converting rows...");
        let result = self.pipeline.transform(raw_data)?;
        tracing::info!("Total rows read: {}", result.summary.rows_read);

        Ok(result)
    }
}
