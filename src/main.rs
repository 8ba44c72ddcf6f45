mod cli;
mod config;
mod error;
mod model;
mod report;
mod service;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use cli::Args;
use service::LookupService;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse().merge_with_config()?;

    // Logs go to stderr; stdout carries only the report lines
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("IP Reporter starting");
    info!(
        "Config: endpoint={}, timeout={:?}",
        args.endpoint, args.timeout
    );

    let service = LookupService::new(&args.endpoint, args.timeout)?;
    let body = service.fetch().await?;

    let stdout = io::stdout();
    let result = report::write_report(&mut stdout.lock(), &body)?;
    info!(
        "Lookup complete: ip={}, eu={}",
        result.ip_address, result.is_in_eu
    );

    Ok(())
}
