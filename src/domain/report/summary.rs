//! Per-domain average ratings.

use serde::Serialize;

use crate::domain::assessment::ResponseStore;
use crate::domain::catalog::{CompetencyDomain, ContentCatalog};

use super::document::BarChart;

pub const SUMMARY_CHART_TITLE: &str = "Average Score by Domain";

/// Average self-rating for one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainAverage {
    pub domain: CompetencyDomain,
    /// Mean of rated items, one decimal; 0.0 when nothing is rated.
    pub average: f64,
    pub rated: usize,
    pub total: usize,
}

/// Averages for every domain, in display order.
///
/// Unrated items are left out of both the sum and the count.
pub fn domain_averages(catalog: &ContentCatalog, responses: &ResponseStore) -> Vec<DomainAverage> {
    catalog
        .domains()
        .map(|domain| {
            let total = catalog.items_in(domain).count();
            let ratings: Vec<u32> = catalog
                .items_in(domain)
                .filter_map(|item| responses.rating(&item.key))
                .map(|r| u32::from(r.value()))
                .collect();

            let average = if ratings.is_empty() {
                0.0
            } else {
                round_one_decimal(ratings.iter().sum::<u32>() as f64 / ratings.len() as f64)
            };

            DomainAverage {
                domain,
                average,
                rated: ratings.len(),
                total,
            }
        })
        .collect()
}

/// The summary chart: one bar per domain on the 0–5 axis.
pub fn summary_chart(catalog: &ContentCatalog, responses: &ResponseStore) -> BarChart {
    let mut chart = BarChart::rating_scale(SUMMARY_CHART_TITLE);
    for avg in domain_averages(catalog, responses) {
        chart.push_bar(avg.domain.name(), avg.average);
    }
    chart
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
