use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once, returning the rendered report.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting housing summary run");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let summary = self.pipeline.transform(records)?;
        tracing::info!(
            "Classified {} records into {} categories",
            summary.total_records,
            summary.category_counts.len()
        );

        // Load
        let report = self.pipeline.load(&summary)?;
        tracing::debug!("Rendered report ({} bytes)", report.len());

        Ok(report)
    }
}
