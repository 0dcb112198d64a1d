//! Keeps a local folder of Security Now show notes in sync with grc.com.
//!
//! One pass looks up the newest episode on the listing page, works out where the
//! previous run stopped from the marker file and downloads every PDF in between.

mod config;
pub mod discover;
mod error;
mod macros;
pub mod marker;
pub mod process;
pub mod request;

pub use config::{Config, FailurePolicy};
pub use error::{Error, Result};

pub type EpisodeNumber = u64;

pub const DISCOVERY_URL: &str = "https://www.grc.com/securitynow.htm";
/// Episode PDFs live at `{PDF_URL_BASE}sn-{N}-notes.pdf`.
pub const PDF_URL_BASE: &str = "https://www.grc.com/sn/";
/// Used when no marker exists, or when the marker points below it.
pub const DEFAULT_START_EPISODE: EpisodeNumber = 596;
pub const MARKER_FILE_NAME: &str = "last_downloaded_episode.txt";
