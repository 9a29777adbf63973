use reqwest::Url;
use tracing::{debug, info};

use crate::error::LookupError;

pub const DEFAULT_BASE_URL: &str = "https://dexonline.ro/definitie";

/// `{base}/{word}` with the word percent-encoded as one path segment.
pub fn entry_url(base: &str, word: &str) -> Result<Url, LookupError> {
    let mut url = Url::parse(base).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

/// Fetch the entry page for `word`. Server errors and transport failures are
/// fatal; any other response body goes to the extractor, which decides
/// whether the page holds an entry.
pub async fn fetch_entry_page(base: &str, word: &str) -> Result<String, LookupError> {
    let url = entry_url(base, word)?;
    let fetch_err = |source| LookupError::Fetch {
        url: url.to_string(),
        source,
    };

    info!("Fetching {}", url);
    let response = reqwest::get(url.clone()).await.map_err(fetch_err)?;
    let status = response.status();
    debug!("{} -> {}", url, status);

    let response = if status.is_server_error() {
        response.error_for_status().map_err(fetch_err)?
    } else {
        response
    };

    response.text().await.map_err(fetch_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_becomes_path_segment() {
        let url = entry_url(DEFAULT_BASE_URL, "fi").unwrap();
        assert_eq!(url.as_str(), "https://dexonline.ro/definitie/fi");
    }

    #[test]
    fn diacritics_are_encoded() {
        let url = entry_url(DEFAULT_BASE_URL, "cățel").unwrap();
        assert_eq!(url.as_str(), "https://dexonline.ro/definitie/c%C4%83%C8%9Bel");
    }

    #[test]
    fn trailing_slash_base() {
        let url = entry_url("https://dexonline.ro/definitie/", "fi").unwrap();
        assert_eq!(url.as_str(), "https://dexonline.ro/definitie/fi");
    }

    #[test]
    fn bad_base_url() {
        assert!(matches!(entry_url("not a url", "fi"), Err(LookupError::InvalidUrl(_))));
        assert!(matches!(entry_url("mailto:dex@example.com", "fi"), Err(LookupError::InvalidUrl(_))));
    }
}
