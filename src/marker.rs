use std::num::IntErrorKind;
use std::path::Path;

use tokio::fs;

use crate::{EpisodeNumber, Error, Result};

/// Reads the last completed episode from the marker file.
/// A missing, unreadable or garbled marker all mean "no prior progress".
/// A number too large to represent saturates, so it still reads as "everything done".
pub async fn load_last_episode(path: impl AsRef<Path>) -> Option<EpisodeNumber> {
    let text = fs::read_to_string(path).await.ok()?;
    match text.trim().parse::<EpisodeNumber>() {
        Ok(episode) => Some(episode),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(EpisodeNumber::MAX),
        Err(_) => None,
    }
}

/// Replaces the marker with `episode`.
///
/// The number is written to a sibling temp file first and then renamed over the marker,
/// so an interrupted write leaves the previous value in place.
pub async fn save_last_episode(path: impl AsRef<Path>, episode: EpisodeNumber) -> Result<()> {
    let path = path.as_ref();
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");

    let write = async {
        fs::write(&tmp_path, episode.to_string()).await?;
        fs::rename(&tmp_path, path).await
    };
    if let Err(source) = write.await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(Error::MarkerWrite {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// First episode to fetch: one past the marker, never below `floor`.
#[inline]
pub fn start_episode(last: Option<EpisodeNumber>, floor: EpisodeNumber) -> EpisodeNumber {
    match last {
        Some(last) => last.saturating_add(1).max(floor),
        None => floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_START_EPISODE;

    #[test]
    fn start_respects_the_floor() {
        assert_eq!(start_episode(None, DEFAULT_START_EPISODE), 596);
        assert_eq!(start_episode(Some(3), DEFAULT_START_EPISODE), 596);
        assert_eq!(start_episode(Some(595), DEFAULT_START_EPISODE), 596);
        assert_eq!(start_episode(Some(596), DEFAULT_START_EPISODE), 597);
        assert_eq!(start_episode(Some(1010), DEFAULT_START_EPISODE), 1011);
        assert_eq!(
            start_episode(Some(u64::MAX), DEFAULT_START_EPISODE),
            u64::MAX
        );
    }

    #[tokio::test]
    async fn marker_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marker.txt");

        assert_eq!(load_last_episode(&path).await, None);

        save_last_episode(&path, 600).await.unwrap();
        assert_eq!(load_last_episode(&path).await, Some(600));

        save_last_episode(&path, 601).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "601");
        assert!(!dir.path().join("marker.txt.tmp").exists());
    }

    #[tokio::test]
    async fn garbled_marker_is_no_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marker.txt");

        std::fs::write(&path, " 742\n").unwrap();
        assert_eq!(load_last_episode(&path).await, Some(742));

        std::fs::write(&path, "5000000000").unwrap();
        assert_eq!(load_last_episode(&path).await, Some(5_000_000_000));

        std::fs::write(&path, "99999999999999999999999").unwrap();
        assert_eq!(load_last_episode(&path).await, Some(u64::MAX));

        for garbage in ["", "abc", "-5", "12.5"] {
            std::fs::write(&path, garbage).unwrap();
            assert_eq!(load_last_episode(&path).await, None, "{garbage:?}");
        }
    }

    #[tokio::test]
    async fn unwritable_marker_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("marker.txt");

        let err = save_last_episode(&path, 600).await.unwrap_err();
        assert!(matches!(err, Error::MarkerWrite { .. }));
    }
}
