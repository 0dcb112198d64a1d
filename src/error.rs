use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch the episode listing, status code: {0}")]
    DiscoveryStatus(StatusCode),
    #[error("No episode numbers found on the listing page.")]
    NoEpisodesFound,

    #[error("Could not record last episode in {}: {source}", path.display())]
    MarkerWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to download {url}: status code {status}")]
    DownloadStatus { url: String, status: StatusCode },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
