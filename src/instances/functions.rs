//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use crate::instances::{AllInstances, InstanceInventory};

#[async_trait]
impl InstanceInventory for aws_sdk_ec2::Client {
    async fn describe_instance_ids(&self) -> Result<Vec<String>> {
        // no filters: every instance in every state.
        let output = self.describe_instances()
            .send()
            .await
            .with_context(|| "DescribeInstances request failed")?;
        Ok(AllInstances::instance_ids_from_output(&output))
    }
}

impl AllInstances {
    /// Reads the instances of a region.
    ///
    /// A failing listing is reported and results in zero instances, so the caller can carry on with the next region.
    pub async fn read_instances<I: InstanceInventory + ?Sized>(
        inventory: &I,
        region: &str,
    ) -> AllInstances
    {
        info!("begin describe instances ({})", region);
        let timer = Instant::now();

        let instance_ids = match inventory.describe_instance_ids().await {
            Ok(instance_ids) => instance_ids,
            Err(e) => {
                error!("({}) got an error retrieving information about your Amazon EC2 instances: {:#}", region, e);
                Vec::new()
            },
        };

        info!("end describe instances ({}): {} instances, {:?}", region, instance_ids.len(), timer.elapsed());
        AllInstances {
            region: region.to_string(),
            instance_ids,
        }
    }
    /// Collects the instance ids of all reservations in the response.
    pub fn instance_ids_from_output(
        output: &DescribeInstancesOutput,
    ) -> Vec<String>
    {
        if output.next_token().is_some() {
            warn!("DescribeInstances returned more than one page, only the first page is used");
        }
        output.reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .filter_map(|instance| instance.instance_id())
            .map(|instance_id| instance_id.to_string())
            .collect()
    }
    pub fn len(&self) -> usize { self.instance_ids.len() }
    pub fn is_empty(&self) -> bool { self.instance_ids.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use aws_sdk_ec2::types::{Instance, Reservation};

    struct FixedInventory(Vec<String>);

    #[async_trait]
    impl InstanceInventory for FixedInventory {
        async fn describe_instance_ids(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingInventory;

    #[async_trait]
    impl InstanceInventory for FailingInventory {
        async fn describe_instance_ids(&self) -> Result<Vec<String>> {
            Err(anyhow!("UnauthorizedOperation"))
        }
    }

    #[test]
    fn unit_instance_ids_over_reservations() {
        let output = DescribeInstancesOutput::builder()
            .reservations(Reservation::builder()
                .instances(Instance::builder().instance_id("i-1111").build())
                .instances(Instance::builder().instance_id("i-2222").build())
                .build())
            .reservations(Reservation::builder()
                .instances(Instance::builder().instance_id("i-3333").build())
                // an instance without an id is skipped.
                .instances(Instance::builder().build())
                .build())
            .build();
        let instance_ids = AllInstances::instance_ids_from_output(&output);
        assert_eq!(instance_ids, vec!["i-1111", "i-2222", "i-3333"]);
    }
    #[test]
    fn unit_instance_ids_empty_output() {
        let output = DescribeInstancesOutput::builder().build();
        assert!(AllInstances::instance_ids_from_output(&output).is_empty());
    }
    #[tokio::test]
    async fn unit_read_instances() {
        let inventory = FixedInventory(vec!["i-1111".to_string(), "i-2222".to_string()]);
        let allinstances = AllInstances::read_instances(&inventory, "us-west-2").await;
        assert_eq!(allinstances.region, "us-west-2");
        assert_eq!(allinstances.len(), 2);
    }
    #[tokio::test]
    async fn unit_read_instances_failure_is_zero_instances() {
        let allinstances = AllInstances::read_instances(&FailingInventory, "us-east-1").await;
        assert!(allinstances.is_empty());
        assert_eq!(allinstances.region, "us-east-1");
    }
}
