//! Module for listing the EC2 instances of a region using `DescribeInstances`.
//!
//! Only the first page of the response is read.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
