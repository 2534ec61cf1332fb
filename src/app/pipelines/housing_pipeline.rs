use crate::core::aggregator::count_categories;
use crate::core::classifier::classify_houses;
use crate::core::extremum::min_area_per_resident;
use crate::core::loader::load_houses;
use crate::core::report;
use crate::core::{ConfigProvider, HouseRecord, HousingSummary, Pipeline, Storage};
use crate::utils::error::Result;

pub struct HousingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> HousingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for HousingPipeline<S, C> {
    fn extract(&self) -> Result<Vec<HouseRecord>> {
        tracing::debug!("Loading houses from {}", self.config.input_file());
        load_houses(&self.storage, self.config.input_file())
    }

    fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingSummary> {
        let thresholds = self.config.thresholds();
        let categories = classify_houses(&records, &thresholds)?;
        let category_counts = count_categories(categories);

        let min_area = min_area_per_resident(&records)?;
        tracing::debug!(
            "Minimum area per resident: {:.2} at '{}'",
            min_area.area_per_resident,
            min_area.house_address
        );

        Ok(HousingSummary {
            total_records: records.len(),
            category_counts,
            min_area_per_resident: min_area.into(),
        })
    }

    fn load(&self, summary: &HousingSummary) -> Result<String> {
        report::render(summary, self.config.output_format())
    }
}
