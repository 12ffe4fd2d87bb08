//! Find EC2 instances with little or no network traffic.
//!
//! For every region the instances are listed, and for every instance the summed `NetworkIn` and
//! `NetworkOut` CloudWatch metrics over the lookback window are reported in GiB.
//!
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod clients;
pub mod cloudwatch;
pub mod config;
pub mod instances;
pub mod report;
pub mod utility;
