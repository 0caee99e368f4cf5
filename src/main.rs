mod config;
mod error;
mod weather;

use std::{env, process};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Prints the current temperature for the city named by the command line arguments.
///
/// Exits with status 1 and no output when no city is given. Any other failure
/// (missing API key, network, upstream status, bad payload) is reported on stderr.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(city) = config::city_from_args(env::args_os().skip(1)) else {
        process::exit(1);
    };

    let api_key = config::api_key(env::var(config::API_KEY_VAR).ok())?;

    let sample = match config::endpoint(env::var(config::ENDPOINT_VAR).ok()) {
        Some(endpoint) => weather::fetch_temperature_from(&endpoint, &api_key, &city).await,
        None => weather::fetch_temperature(&api_key, &city).await,
    }
    .with_context(|| format!("Error fetching temperature for {}", city))?;

    println!("{}", sample);
    Ok(())
}
