use chrono::Local;
use reqwest::Client;

use crate::discover::latest_episode;
use crate::marker::{load_last_episode, save_last_episode, start_episode};
use crate::request::{download_pdf, DownloadOutcome};
use crate::{info_time, warn_time, Config, EpisodeNumber, FailurePolicy, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The marker is already at or past the newest episode, nothing was requested.
    UpToDate {
        start: EpisodeNumber,
        latest: EpisodeNumber,
    },
    Completed(RunSummary),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub already_present: usize,
    pub failed: Vec<EpisodeNumber>,
    /// Set when `FailurePolicy::Halt` cut the range short.
    pub halted: bool,
}

/// One full pass: discover the newest episode, resume from the marker and fetch what's missing.
///
/// Only a failed discovery is returned as an error. Marker and per-episode failures are
/// reported here and handled according to `config.on_failure`.
pub async fn run(config: &Config) -> Result<RunOutcome> {
    let client = Client::new();

    let latest = latest_episode(&client, config).await?;
    let last = load_last_episode(&config.marker_path).await;
    let start = start_episode(last, config.default_start_episode);

    if start > latest {
        info_time!("No new episodes to download. You're up to date!");
        return Ok(RunOutcome::UpToDate { start, latest });
    }

    info_time!("Starting download from episode {start} to episode {latest}...");
    let summary = fetch_range(&client, config, start, latest).await;
    Ok(RunOutcome::Completed(summary))
}

async fn fetch_range(
    client: &Client,
    config: &Config,
    start: EpisodeNumber,
    latest: EpisodeNumber,
) -> RunSummary {
    let start_time = Local::now();
    let mut summary = RunSummary::default();

    for episode in start..=latest {
        let url = config.pdf_url(episode);
        let dest = config.artifact_path(episode);
        let file_name = Config::file_name(episode);

        match download_pdf(client, &url, &dest).await {
            Ok(outcome) => {
                match outcome {
                    DownloadOutcome::AlreadyPresent => {
                        summary.already_present += 1;
                        info_time!("File already exists, skipping: {file_name}");
                    }
                    DownloadOutcome::Downloaded { bytes } => {
                        summary.downloaded += 1;
                        info_time!("Downloaded: {file_name} ({bytes} bytes)");
                    }
                }
                if let Err(e) = save_last_episode(&config.marker_path, episode).await {
                    warn_time!("{e}");
                }
            }
            Err(e) => {
                summary.failed.push(episode);
                info_time!("Error downloading {file_name}: {e}");
                if config.on_failure == FailurePolicy::Halt {
                    summary.halted = true;
                    info_time!("Stopping at episode {episode}, later episodes are left for the next run.");
                    break;
                }
            }
        }
    }

    info_time!(
        start_time,
        "Download complete. {} downloaded, {} already present, {} failed.",
        summary.downloaded,
        summary.already_present,
        summary.failed.len()
    );
    summary
}
