pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod readers;
pub mod sampler;
pub mod writers;

pub use config::{SampleConfig, SampleConfigBuilder};
pub use dataset::TableDataset;
pub use pipeline::SampleReport;
pub use readers::CsvSource;
pub use sampler::{RandomSampler, Sampler};
pub use writers::CsvSink;
