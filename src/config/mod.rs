//! Module holding the run parameters and the time window derived from them.
//!
//! All parameters are constants of the program, collected in [Config] and validated once at startup.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
