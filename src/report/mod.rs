//! Module for the per region traffic report.
//!
//! For every instance of a region the inbound and outbound network metrics are fetched, summed,
//! converted to GiB and printed as one line.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
