use std::path::{Path, PathBuf};

use crate::{
    EpisodeNumber, DEFAULT_START_EPISODE, DISCOVERY_URL, MARKER_FILE_NAME, PDF_URL_BASE,
};

/// What the fetch loop does after an episode fails to download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and move on to the next episode.
    /// The marker may then point past the missing episode.
    #[default]
    Skip,
    /// Stop at the first failure, the marker stays on the last contiguous success.
    Halt,
}

/// Everything a run needs to know about where to fetch from and where to write to.
#[derive(Debug, Clone)]
pub struct Config {
    pub discovery_url: String,
    pub pdf_url_base: String,
    pub default_start_episode: EpisodeNumber,
    pub marker_path: PathBuf,
    pub download_dir: PathBuf,
    pub on_failure: FailurePolicy,
}

impl Config {
    /// Default grc.com endpoints, with the marker and the PDFs kept in `base_dir`.
    pub fn in_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Config {
            discovery_url: DISCOVERY_URL.into(),
            pdf_url_base: PDF_URL_BASE.into(),
            default_start_episode: DEFAULT_START_EPISODE,
            marker_path: base_dir.join(MARKER_FILE_NAME),
            download_dir: base_dir.to_path_buf(),
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    #[inline]
    pub fn file_name(episode: EpisodeNumber) -> String {
        format!("sn-{episode}-notes.pdf")
    }

    pub fn pdf_url(&self, episode: EpisodeNumber) -> String {
        format!("{}{}", self.pdf_url_base, Self::file_name(episode))
    }

    pub fn artifact_path(&self, episode: EpisodeNumber) -> PathBuf {
        self.download_dir.join(Self::file_name(episode))
    }
}
