use std::path::Path;

use reqwest::{Client, StatusCode};
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A file with the target name was already there, nothing was requested.
    AlreadyPresent,
    Downloaded { bytes: u64 },
}

/// Streams `url` into `dest` unless `dest` already exists.
///
/// Existing files are trusted as-is. Anything but `200 OK` is a failure and writes nothing.
/// A body that fails mid-transfer removes the partial file.
pub async fn download_pdf(client: &Client, url: &str, dest: &Path) -> Result<DownloadOutcome> {
    if fs::try_exists(dest).await.unwrap_or(false) {
        return Ok(DownloadOutcome::AlreadyPresent);
    }

    let mut res = client.get(url).send().await?;
    let status = res.status();
    if status != StatusCode::OK {
        return Err(Error::DownloadStatus {
            url: url.into(),
            status,
        });
    }

    let mut file = File::create(dest).await?;
    let mut bytes = 0;
    let copied: Result<()> = async {
        while let Some(chunk) = res.chunk().await? {
            if chunk.is_empty() {
                continue;
            }
            file.write_all(&chunk).await?;
            bytes += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(())
    }
    .await;

    if let Err(e) = copied {
        drop(file);
        let _ = fs::remove_file(dest).await;
        return Err(e);
    }
    Ok(DownloadOutcome::Downloaded { bytes })
}
