//! The structs
//!
use chrono::{DateTime, Utc};

/// The regions that are scanned, in this order.
pub const DEFAULT_REGIONS: [&str; 2] = ["us-west-2", "us-east-1"];
/// 7.5 days.
pub const DEFAULT_LOOKBACK_MINUTES: i64 = 10800;
/// 24 hours.
pub const DEFAULT_PERIOD_SECONDS: i32 = 86400;
pub const DEFAULT_STATISTIC: &str = "Sum";
pub const DEFAULT_NAMESPACE: &str = "AWS/EC2";
pub const DEFAULT_DIMENSION_NAME: &str = "InstanceId";
pub const DEFAULT_QUERY_ID: &str = "inst";
pub const METRIC_NETWORK_IN: &str = "NetworkIn";
pub const METRIC_NETWORK_OUT: &str = "NetworkOut";

/// The run parameters.
///
/// This struct is created once, validated, and then passed by reference to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub regions: Vec<String>,
    /// How far back the time window starts, in minutes.
    pub lookback_minutes: i64,
    /// The bucket width for the metrics service, in seconds.
    pub period_seconds: i32,
    pub statistic: String,
    pub namespace: String,
    pub dimension_name: String,
    /// Short name to tie a query to its result in the response.
    pub query_id: String,
    /// The inbound and outbound metric names, in that order.
    pub metric_names: Vec<String>,
}

/// The window for all metric queries of a run.
///
/// Both timestamps are truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
