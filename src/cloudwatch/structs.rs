//! The structs
//!
use anyhow::Result;
use async_trait::async_trait;
use crate::config::TimeWindow;

/// A single metric query, for one metric and one dimension value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricQuery {
    pub id: String,
    pub namespace: String,
    pub metric_name: String,
    pub dimension_name: String,
    pub dimension_value: String,
    pub period: i32,
    pub stat: String,
}

/// The values returned for a [MetricQuery], in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub id: String,
    pub label: Option<String>,
    pub values: Vec<f64>,
}

/// The metrics service of a single region.
///
/// The CloudWatch client implements this, tests use an in-memory version.
#[async_trait]
pub trait MetricSource {
    async fn get_metric_series(&self, query: &MetricQuery, window: &TimeWindow) -> Result<MetricSeries>;
}
