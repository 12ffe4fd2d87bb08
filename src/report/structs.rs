//! The structs
//!
use regex::Regex;

/// The summed network traffic of one instance over the time window, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceTraffic {
    pub instance_id: String,
    pub network_in_bytes: f64,
    pub network_out_bytes: f64,
}

/// Switches that influence what gets printed, not what gets measured.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Only instances matching this are queried.
    pub instance_filter: Regex,
    /// Print every query as json before it is sent.
    pub debug_queries: bool,
    /// Print every returned series as json.
    pub debug_results: bool,
}

/// Counters for a region, returned after the region is reported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub region: String,
    pub instances: usize,
    pub reported: usize,
    pub failed: usize,
    pub skipped: usize,
}
