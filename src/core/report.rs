use crate::config::OutputFormat;
use crate::domain::model::HousingSummary;
use crate::utils::error::Result;
use std::fmt::Write;

pub fn render(summary: &HousingSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => render_json(summary),
    }
}

/// Two human-readable blocks: category counts, then the address with the
/// least living space per resident.
pub fn render_text(summary: &HousingSummary) -> String {
    let mut out = String::from("Number of houses in each category:\n");
    for (category, count) in &summary.category_counts {
        // writing to a String cannot fail
        let _ = writeln!(out, " Category: {}. Count: {}.", category, count);
    }

    out.push_str(
        "\nThe house with the minimum average residential area per resident is located at:\n",
    );
    let _ = writeln!(out, " {}", summary.min_area_per_resident.house_address);
    out
}

pub fn render_json(summary: &HousingSummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
