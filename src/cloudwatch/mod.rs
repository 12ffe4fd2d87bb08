//! Module for reading metric time series from CloudWatch using `GetMetricData`.
//!
//! Every request carries exactly one query, for one metric of one instance.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
