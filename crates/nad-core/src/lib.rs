#![deny(unsafe_code)]

//! Normalization of jurisdiction address points into the NAD schema.

pub mod context;
pub mod filter;
pub mod pipeline;
pub mod stage;
pub mod state;
pub mod steps;

pub use context::PipelineContext;
pub use filter::{FilterOutcome, filter_records, is_house_number};
pub use pipeline::{
    NormalizationPipeline, PipelineOutput, ProcessingStep, build_default_pipeline, run_pipeline,
};
pub use stage::PipelineStage;
pub use state::{JoinReport, PipelineState, RunReport, StageReport};
