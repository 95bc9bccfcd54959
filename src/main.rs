mod bootstrap_config;
mod config;
mod pipeline;
mod records;

use crate::bootstrap_config::BootstrapConfig;
use crate::config::{load_config, ConfigError};
use crate::records::RecordsError;
use clustering::errors::{DisconnectedGraphError, NumericRangeError};
use common::util::logging;
use log::{error, info};
use std::fmt::{Display, Formatter};

fn main() {
    if let Err(err) = run() {
        error!(target: "main", "{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StopClustersError> {
    let bootstrap_config = BootstrapConfig::read();

    logging::initialize_logging(bootstrap_config.log_level.clone().into());
    print_startup_message();

    let config = load_config(&bootstrap_config)?;

    pipeline::run(config)
}

fn print_startup_message() {
    info!("\n     _                  \n ___| |_ ___  _ __  ___ \n/ __| __/ _ \\| '_ \\/ __|\n\\__ \\ || (_) | |_) \\__ \\\n|___/\\__\\___/| .__/|___/\n             |_|        \n\n S T O P   C L U S T E R I N G\n");
}

#[derive(thiserror::Error, Debug)]
pub enum StopClustersError {
    Config(#[from] ConfigError),
    Records(#[from] RecordsError),
    NumericRange(#[from] NumericRangeError),
    DisconnectedGraph(#[from] DisconnectedGraphError),
    IO(#[from] std::io::Error),
}

impl Display for StopClustersError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            StopClustersError::Config(err) => err,
            StopClustersError::Records(err) => err,
            StopClustersError::NumericRange(err) => err,
            StopClustersError::DisconnectedGraph(err) => err,
            StopClustersError::IO(err) => err,
        };
        let prefix = match self {
            StopClustersError::Config(_) => "Reading config file",
            StopClustersError::Records(_) => "Reading departure records",
            StopClustersError::NumericRange(_) => "Computing affinity matrix",
            StopClustersError::DisconnectedGraph(_) => "Clustering stops",
            StopClustersError::IO(_) => "Error during IO",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
