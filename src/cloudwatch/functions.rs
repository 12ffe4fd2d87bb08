//! The impls and functions
//!
use log::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_cloudwatch::operation::get_metric_data::GetMetricDataOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, Metric, MetricDataQuery, MetricStat};
use crate::config::{Config, TimeWindow};
use crate::cloudwatch::{MetricQuery, MetricSeries, MetricSource};

#[async_trait]
impl MetricSource for aws_sdk_cloudwatch::Client {
    async fn get_metric_series(&self, query: &MetricQuery, window: &TimeWindow) -> Result<MetricSeries> {
        let output = self.get_metric_data()
            .start_time(DateTime::from_secs(window.start.timestamp()))
            .end_time(DateTime::from_secs(window.end.timestamp()))
            .metric_data_queries(query.to_metric_data_query()?)
            .send()
            .await
            .with_context(|| format!("GetMetricData request failed for {} {}", query.metric_name, query.dimension_value))?;
        Ok(MetricSeries::from_output(&query.id, &output))
    }
}

impl MetricQuery {
    pub fn new(
        config: &Config,
        metric_name: &str,
        instance_id: &str,
    ) -> Self
    {
        Self {
            id: config.query_id.to_string(),
            namespace: config.namespace.to_string(),
            metric_name: metric_name.to_string(),
            dimension_name: config.dimension_name.to_string(),
            dimension_value: instance_id.to_string(),
            period: config.period_seconds,
            stat: config.statistic.to_string(),
        }
    }
    /// Builds the SDK query. This fails if a required field is missing from the builders.
    pub fn to_metric_data_query(
        &self,
    ) -> Result<MetricDataQuery>
    {
        let dimension = Dimension::builder()
            .name(&self.dimension_name)
            .value(&self.dimension_value)
            .build()
            .with_context(|| "Error building Dimension")?;
        let metric = Metric::builder()
            .namespace(&self.namespace)
            .metric_name(&self.metric_name)
            .dimensions(dimension)
            .build();
        let metric_stat = MetricStat::builder()
            .metric(metric)
            .period(self.period)
            .stat(&self.stat)
            .build()
            .with_context(|| "Error building MetricStat")?;
        MetricDataQuery::builder()
            .id(&self.id)
            .metric_stat(metric_stat)
            .build()
            .with_context(|| "Error building MetricDataQuery")
    }
}

impl MetricSeries {
    /// Picks the result for `query_id` out of the response.
    ///
    /// A response without a result for the id gives an empty series.
    pub fn from_output(
        query_id: &str,
        output: &GetMetricDataOutput,
    ) -> Self
    {
        if output.next_token().is_some() {
            warn!("GetMetricData returned more than one page for {}, only the first page is used", query_id);
        }
        match output.metric_data_results().iter().find(|r| r.id() == Some(query_id)) {
            Some(result) => Self {
                id: query_id.to_string(),
                label: result.label().map(|l| l.to_string()),
                values: result.values().to_vec(),
            },
            None => {
                debug!("no metric data result for query id {}", query_id);
                Self {
                    id: query_id.to_string(),
                    ..Default::default()
                }
            },
        }
    }
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}
