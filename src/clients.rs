//! The AWS clients.
//!
//! The shared configuration is loaded once per run; the clients of a region are derived from it.
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;

/// Loads the AWS configuration from the environment, profile files and instance metadata,
/// and checks that credentials can be resolved.
///
/// This is the only fatal error of a run: without credentials no region can be read.
pub async fn load_sdk_config(
) -> Result<SdkConfig>
{
    info!("begin load aws configuration");
    let timer = Instant::now();

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let credentials_provider = sdk_config.credentials_provider()
        .with_context(|| "configuration error, no credentials provider found")?;
    credentials_provider.provide_credentials()
        .await
        .with_context(|| "configuration error, unable to resolve AWS credentials")?;

    info!("end load aws configuration: {:?}", timer.elapsed());
    Ok(sdk_config)
}

/// The clients for a single region.
#[derive(Debug, Clone)]
pub struct RegionClients {
    pub region: String,
    pub ec2: aws_sdk_ec2::Client,
    pub cloudwatch: aws_sdk_cloudwatch::Client,
}

impl RegionClients {
    pub fn new(
        sdk_config: &SdkConfig,
        region: &str,
    ) -> Self
    {
        debug!("creating clients for region {}", region);
        let ec2_config = aws_sdk_ec2::config::Builder::from(sdk_config)
            .region(aws_sdk_ec2::config::Region::new(region.to_string()))
            .build();
        let cloudwatch_config = aws_sdk_cloudwatch::config::Builder::from(sdk_config)
            .region(aws_sdk_cloudwatch::config::Region::new(region.to_string()))
            .build();
        Self {
            region: region.to_string(),
            ec2: aws_sdk_ec2::Client::from_conf(ec2_config),
            cloudwatch: aws_sdk_cloudwatch::Client::from_conf(cloudwatch_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::Credentials;

    #[tokio::test]
    async fn unit_region_clients_use_their_region() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(aws_config::Region::new("eu-west-1"))
            .credentials_provider(aws_credential_types::provider::SharedCredentialsProvider::new(
                Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"),
            ))
            .build();
        let clients = RegionClients::new(&sdk_config, "us-east-1");
        assert_eq!(clients.region, "us-east-1");
        assert_eq!(clients.ec2.config().region().map(|r| r.to_string()), Some("us-east-1".to_string()));
        assert_eq!(clients.cloudwatch.config().region().map(|r| r.to_string()), Some("us-east-1".to_string()));
    }
}
