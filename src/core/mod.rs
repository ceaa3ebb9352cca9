pub mod etl;
pub mod pipeline;
pub mod transformer;

pub use crate::domain::model::{InputRecord, OutputRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
