use std::io::{stdout, Write};
use std::time::Instant;
use clap::Parser;
use log::*;
use anyhow::Result;
use dotenv::dotenv;

use no_traffic_instances::{clients, config, report, utility};

/// Report the network traffic of all EC2 instances over the last 7.5 days.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// only query instances with an id matching this regex
    #[arg(short, long)]
    instance_match: Option<String>,
    /// print every metrics query as json
    #[arg(long)]
    debug_queries: bool,
    /// print every metrics query result as json
    #[arg(long)]
    debug_results: bool,
}

#[tokio::main]
async fn main() -> Result<()>
{
    env_logger::init();
    let options = Opts::parse();
    // AWS_PROFILE, AWS_ACCESS_KEY_ID and friends can be set in .env.
    dotenv().ok();

    let config = config::Config::new();
    config.validate()?;

    let mut report_options = report::ReportOptions::new(utility::set_regex(&options.instance_match)?);
    report_options.debug_queries = options.debug_queries;
    report_options.debug_results = options.debug_results;

    let sdk_config = clients::load_sdk_config().await?;

    info!("begin regions {:?}", config.regions);
    let timer = Instant::now();

    let window = config.time_window();
    let mut out = stdout().lock();
    for region in config.regions.iter() {
        let region_clients = clients::RegionClients::new(&sdk_config, region);
        report::report_region(
            &config,
            region,
            &region_clients.ec2,
            &region_clients.cloudwatch,
            &window,
            &report_options,
            &mut out,
        ).await?;
        out.flush()?;
    }

    info!("end regions: {:?}", timer.elapsed());
    Ok(())
}
