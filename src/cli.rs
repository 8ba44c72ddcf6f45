use clap::Parser;

use crate::config::FileConfig;
use crate::error::Result;
use crate::service::DEFAULT_ENDPOINT;

#[derive(Parser, Debug)]
#[command(name = "ip-report")]
#[command(version = "0.1.0")]
#[command(about = "Reports the caller's external IP address and EU geolocation", long_about = None)]
pub struct Args {
    /// Lookup service URL
    #[arg(short = 'u', long, env = "IP_REPORT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in milliseconds (waits indefinitely when unset)
    #[arg(short = 't', long, env = "IP_REPORT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Optional TOML config file
    #[arg(short = 'c', long, env = "IP_REPORT_CONFIG")]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, env = "IP_REPORT_VERBOSE")]
    pub verbose: bool,
}

impl Args {
    /// Folds config-file values underneath values set on the command line or
    /// via the environment.
    pub fn merge_with_config(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };
        let file = FileConfig::load(&path)?;

        if self.endpoint == DEFAULT_ENDPOINT {
            if let Some(endpoint) = file.endpoint {
                self.endpoint = endpoint;
            }
        }
        if self.timeout.is_none() {
            self.timeout = file.timeout;
        }
        self.verbose = self.verbose || file.verbose.unwrap_or(false);

        Ok(self)
    }
}
