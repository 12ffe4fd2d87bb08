//! The impls and functions
//!
use chrono::{DateTime, Duration, SubsecRound, Utc};
use log::*;
use anyhow::{bail, Result};
use crate::config::{
    Config, TimeWindow,
    DEFAULT_REGIONS, DEFAULT_LOOKBACK_MINUTES, DEFAULT_PERIOD_SECONDS, DEFAULT_STATISTIC,
    DEFAULT_NAMESPACE, DEFAULT_DIMENSION_NAME, DEFAULT_QUERY_ID, METRIC_NETWORK_IN, METRIC_NETWORK_OUT,
};

impl Default for Config {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            lookback_minutes: DEFAULT_LOOKBACK_MINUTES,
            period_seconds: DEFAULT_PERIOD_SECONDS,
            statistic: DEFAULT_STATISTIC.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            dimension_name: DEFAULT_DIMENSION_NAME.to_string(),
            query_id: DEFAULT_QUERY_ID.to_string(),
            metric_names: vec![METRIC_NETWORK_IN.to_string(), METRIC_NETWORK_OUT.to_string()],
        }
    }
}

impl Config {
    pub fn new() -> Self { Default::default() }
    /// Checks the fields for values the metrics service would reject, or that make the report meaningless.
    pub fn validate(
        &self,
    ) -> Result<()>
    {
        if self.regions.is_empty() {
            bail!("configuration error, no regions set");
        }
        if let Some(region) = self.regions.iter().find(|r| r.trim().is_empty()) {
            bail!("configuration error, empty region name: '{}'", region);
        }
        if self.lookback_minutes <= 0 {
            bail!("configuration error, lookback must be positive: {} minutes", self.lookback_minutes);
        }
        // CloudWatch accepts periods of 1, 5, 10, 30 and multiples of 60 seconds;
        // for a multi-day window only multiples of 60 make sense.
        if self.period_seconds <= 0 || self.period_seconds % 60 != 0 {
            bail!("configuration error, period must be a positive multiple of 60 seconds: {}", self.period_seconds);
        }
        for (name, value) in [
            ("statistic", &self.statistic),
            ("namespace", &self.namespace),
            ("dimension name", &self.dimension_name),
            ("query id", &self.query_id),
        ] {
            if value.is_empty() {
                bail!("configuration error, {} is empty", name);
            }
        }
        if self.metric_names.len() != 2 || self.metric_names.iter().any(|m| m.is_empty()) {
            bail!("configuration error, exactly two metric names (in, out) are required: {:?}", self.metric_names);
        }
        if (self.lookback_minutes * 60) % i64::from(self.period_seconds) != 0 {
            debug!("period {}s does not divide the window of {} minutes evenly", self.period_seconds, self.lookback_minutes);
        }
        Ok(())
    }
    pub fn network_in(&self) -> &str { &self.metric_names[0] }
    pub fn network_out(&self) -> &str { &self.metric_names[1] }
    /// The time window ending now.
    pub fn time_window(
        &self,
    ) -> TimeWindow
    {
        TimeWindow::ending_at(Utc::now(), self.lookback_minutes)
    }
}

impl TimeWindow {
    pub fn ending_at(
        now: DateTime<Utc>,
        lookback_minutes: i64,
    ) -> Self
    {
        let end = now.trunc_subsecs(0);
        Self {
            start: end - Duration::minutes(lookback_minutes),
            end,
        }
    }
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unit_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.regions, vec!["us-west-2".to_string(), "us-east-1".to_string()]);
        assert_eq!(config.network_in(), "NetworkIn");
        assert_eq!(config.network_out(), "NetworkOut");
        assert_eq!(config.period_seconds, 86400);
        assert_eq!(config.statistic, "Sum");
    }
    #[test]
    fn unit_config_rejects_no_regions() {
        let config = Config { regions: Vec::new(), ..Config::new() };
        assert!(config.validate().is_err());
    }
    #[test]
    fn unit_config_rejects_empty_region_name() {
        let config = Config { regions: vec!["us-west-2".to_string(), " ".to_string()], ..Config::new() };
        assert!(config.validate().is_err());
    }
    #[test]
    fn unit_config_rejects_bad_period_and_lookback() {
        assert!(Config { period_seconds: 0, ..Config::new() }.validate().is_err());
        assert!(Config { period_seconds: 90, ..Config::new() }.validate().is_err());
        assert!(Config { lookback_minutes: 0, ..Config::new() }.validate().is_err());
        // a period that doesn't divide the window is accepted.
        assert!(Config { period_seconds: 7200, lookback_minutes: 100, ..Config::new() }.validate().is_ok());
    }
    #[test]
    fn unit_config_rejects_wrong_metric_names() {
        let config = Config { metric_names: vec!["NetworkIn".to_string()], ..Config::new() };
        assert!(config.validate().is_err());
    }
    #[test]
    fn unit_time_window_spans_lookback() {
        let now = Utc.with_ymd_and_hms(2022, 9, 1, 12, 0, 0).unwrap() + Duration::milliseconds(750);
        let window = TimeWindow::ending_at(now, DEFAULT_LOOKBACK_MINUTES);
        assert_eq!(window.end, Utc.with_ymd_and_hms(2022, 9, 1, 12, 0, 0).unwrap());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2022, 8, 25, 0, 0, 0).unwrap());
        assert_eq!(window.duration(), Duration::minutes(10800));
    }
    #[test]
    fn unit_time_window_from_config_is_whole_seconds() {
        let window = Config::new().time_window();
        assert!(window.start < window.end);
        assert_eq!(window.end.timestamp_subsec_nanos(), 0);
        assert_eq!(window.duration().num_minutes(), 10800);
    }
}
