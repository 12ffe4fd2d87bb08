//! The structs
//!
use anyhow::Result;
use async_trait::async_trait;

/// The inventory of a single region.
///
/// The EC2 client implements this, tests use an in-memory version.
#[async_trait]
pub trait InstanceInventory {
    /// Returns the ids of the instances visible in the region of the implementor.
    async fn describe_instance_ids(&self) -> Result<Vec<String>>;
}

/// Wrapper struct for the instance ids found in a region.
#[derive(Debug, Default)]
pub struct AllInstances {
    pub region: String,
    pub instance_ids: Vec<String>,
}
