use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};

use crate::{info_time, Config, EpisodeNumber, Error, Result};

/// "Episode", optional whitespace, '#', digits. `\s` is Unicode aware so a decoded `&nbsp;` matches too.
static EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Episode\s*#(\d+)").expect("episode pattern is valid"));

/// Requests the listing page and returns the highest episode number mentioned on it.
pub async fn latest_episode(client: &Client, config: &Config) -> Result<EpisodeNumber> {
    let res = client.get(&config.discovery_url).send().await?;
    let status = res.status();
    if status != StatusCode::OK {
        return Err(Error::DiscoveryStatus(status));
    }
    let html = res.text().await?;

    let latest = extract_latest_episode(&html).ok_or(Error::NoEpisodesFound)?;

    info_time!("Latest episode: {latest}");
    Ok(latest)
}

/// Decodes the HTML entities of the whole page source and returns the largest `Episode #N` in it.
/// Markup is left in place, so attributes and comments count and tags break a match.
/// Digit runs too long for an `EpisodeNumber` are ignored.
pub fn extract_latest_episode(html: &str) -> Option<EpisodeNumber> {
    let decoded = html_escape::decode_html_entities(html);

    EPISODE_RE
        .captures_iter(&decoded)
        .filter_map(|caps| caps[1].parse::<EpisodeNumber>().ok())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_highest_episode() {
        let html = r#"<html><body>
            <p>Episode #1001 - Something</p>
            <p>Episode #998</p>
            <p>Episode#1003 notes</p>
        </body></html>"#;
        assert_eq!(extract_latest_episode(html), Some(1003));
    }

    #[test]
    fn decodes_entities_before_matching() {
        let html = "<table><tr><td>Episode&nbsp;&#35;1012</td><td>Episode &#x23;1013</td></tr></table>";
        assert_eq!(extract_latest_episode(html), Some(1013));
    }

    #[test]
    fn searches_the_raw_markup() {
        let html = r#"<a title="Episode #1050">x</a> <!-- Episode #1060 --> Episode #1000"#;
        assert_eq!(extract_latest_episode(html), Some(1060));

        assert_eq!(extract_latest_episode("<p>Episode <b>#5</b></p>"), None);
        assert_eq!(extract_latest_episode("<td>Episode</td><td>#7</td>"), None);
    }

    #[test]
    fn page_without_episodes() {
        assert_eq!(extract_latest_episode("<p>Security Now!</p>"), None);
        assert_eq!(extract_latest_episode("<p>Episode # 12</p>"), None);
        assert_eq!(extract_latest_episode("<p>episode #12</p>"), None);
    }

    #[test]
    fn overflowing_numbers_are_skipped() {
        let html = "<p>Episode #99999999999999999999</p><p>Episode #7</p>";
        assert_eq!(extract_latest_episode(html), Some(7));
    }
}
