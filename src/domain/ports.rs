use crate::domain::model::{ConvertOptions, InputRecord, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn convert_options(&self) -> ConvertOptions;
}

pub trait Pipeline {
    /// Fails before anything is written when the input cannot be used.
    fn check_input(&self) -> Result<()>;
    fn extract(&self) -> Result<Vec<InputRecord>>;
    fn transform(&self, data: Vec<InputRecord>) -> Result<TransformResult>;
    /// Writes the kept records and returns the output location.
    fn load(&self, result: &TransformResult) -> Result<String>;
}
