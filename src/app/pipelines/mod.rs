pub mod housing_pipeline;

pub use housing_pipeline::HousingPipeline;
