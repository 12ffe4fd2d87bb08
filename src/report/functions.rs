//! The impls and functions
//!
use std::io::Write;
use std::time::Instant;
use log::*;
use anyhow::Result;
use regex::Regex;
use crate::config::{Config, TimeWindow};
use crate::cloudwatch::{MetricQuery, MetricSeries, MetricSource};
use crate::instances::{AllInstances, InstanceInventory};
use crate::report::{InstanceTraffic, RegionSummary, ReportOptions};
use crate::utility;

impl InstanceTraffic {
    pub fn new(
        instance_id: &str,
        network_in: &MetricSeries,
        network_out: &MetricSeries,
    ) -> Self
    {
        Self {
            instance_id: instance_id.to_string(),
            network_in_bytes: network_in.sum(),
            network_out_bytes: network_out.sum(),
        }
    }
    pub fn network_in_gib(&self) -> f64 { utility::bytes_to_gib(self.network_in_bytes) }
    pub fn network_out_gib(&self) -> f64 { utility::bytes_to_gib(self.network_out_bytes) }
    pub fn print<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<()>
    {
        writeln!(out, "instantId: {} total NetworkIn {:.6} GiB NetworkOut {:.6} GiB",
                 self.instance_id,
                 self.network_in_gib(),
                 self.network_out_gib(),
        )?;
        Ok(())
    }
}

impl ReportOptions {
    pub fn new(instance_filter: Regex) -> Self {
        Self {
            instance_filter,
            debug_queries: false,
            debug_results: false,
        }
    }
}

impl RegionSummary {
    pub fn new(region: &str) -> Self {
        Self { region: region.to_string(), ..Default::default() }
    }
}

/// Reports a single region: the instance count, the window, and a line per instance.
pub async fn report_region<I, M, W>(
    config: &Config,
    region: &str,
    inventory: &I,
    metrics: &M,
    window: &TimeWindow,
    options: &ReportOptions,
    out: &mut W,
) -> Result<RegionSummary>
where
    I: InstanceInventory + ?Sized,
    M: MetricSource + ?Sized,
    W: Write + ?Sized,
{
    info!("begin report ({})", region);
    let timer = Instant::now();

    let allinstances = AllInstances::read_instances(inventory, region).await;
    let mut summary = RegionSummary::new(region);
    summary.instances = allinstances.len();

    writeln!(out, "total EC2 instances {} in region {}", allinstances.len(), region)?;
    writeln!(out, "Request startTime {} endTime {}", window.start, window.end)?;

    for instance_id in allinstances.instance_ids.iter() {
        if !options.instance_filter.is_match(instance_id) {
            debug!("({}) instance {} does not match filter, skipping", region, instance_id);
            summary.skipped += 1;
            continue;
        }
        match read_instance_traffic(config, instance_id, metrics, window, options, out).await? {
            Some(traffic) => {
                traffic.print(out)?;
                summary.reported += 1;
            },
            None => {
                writeln!(out, "Could not fetch metric data")?;
                summary.failed += 1;
            },
        }
    }

    info!("end report ({}): {:?} {:?}", region, summary, timer.elapsed());
    Ok(summary)
}

/// Fetches both metrics for an instance and sums them.
///
/// Both requests are always sent, one after the other.
/// `None` means at least one of them failed; the error is logged with the instance id.
/// The outer `Result` is only for failures writing to `out`.
pub async fn read_instance_traffic<M, W>(
    config: &Config,
    instance_id: &str,
    metrics: &M,
    window: &TimeWindow,
    options: &ReportOptions,
    out: &mut W,
) -> Result<Option<InstanceTraffic>>
where
    M: MetricSource + ?Sized,
    W: Write + ?Sized,
{
    let network_in_query = MetricQuery::new(config, config.network_in(), instance_id);
    let network_out_query = MetricQuery::new(config, config.network_out(), instance_id);

    let network_in = fetch_series(metrics, &network_in_query, window, options, out).await?;
    let network_out = fetch_series(metrics, &network_out_query, window, options, out).await?;

    match (network_in, network_out) {
        (Some(network_in), Some(network_out)) => Ok(Some(InstanceTraffic::new(instance_id, &network_in, &network_out))),
        _ => Ok(None),
    }
}

async fn fetch_series<M, W>(
    metrics: &M,
    query: &MetricQuery,
    window: &TimeWindow,
    options: &ReportOptions,
    out: &mut W,
) -> Result<Option<MetricSeries>>
where
    M: MetricSource + ?Sized,
    W: Write + ?Sized,
{
    if options.debug_queries {
        utility::write_json(out, "Metrics query", &(query, window))?;
    }
    match metrics.get_metric_series(query, window).await {
        Ok(series) => {
            if options.debug_results {
                utility::write_json(out, "Query Results", &series)?;
            }
            Ok(Some(series))
        },
        Err(e) => {
            warn!("({}) could not fetch {}: {:#}", query.dimension_value, query.metric_name, e);
            Ok(None)
        },
    }
}
