use chrono::Local;
use sn_notes::{info_time, process::run, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let config = Config::in_dir(std::env::current_dir()?);

    if let Err(e) = run(&config).await {
        info_time!("Failed to retrieve the latest episode number: {e}");
    }
    info_time!(start_time, "Full program time:");

    Ok(())
}
