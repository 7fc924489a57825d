//! Submission URL parsing.

use url::Url;

use crate::error::{RedditError, Result};

/// Extract the base36 submission id from a Reddit URL.
///
/// Accepted shapes:
/// - `https://www.reddit.com/r/<sub>/comments/<id>/<slug>/`
/// - `https://reddit.com/comments/<id>` (also `old.`, `new.`, `np.`, `m.` hosts)
/// - `https://www.reddit.com/gallery/<id>`
/// - `https://redd.it/<id>`
///
/// A missing scheme is tolerated (`reddit.com/r/...`).
pub fn parse_submission_id(locator: &str) -> Result<String> {
    let trimmed = locator.trim();
    if trimmed.is_empty() {
        return Err(invalid(locator, "empty URL"));
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", trimmed))
            .map_err(|e| invalid(locator, &e.to_string()))?,
        Err(e) => return Err(invalid(locator, &e.to_string())),
    };

    let host = url
        .host_str()
        .ok_or_else(|| invalid(locator, "URL has no host"))?
        .to_ascii_lowercase();

    let mut segments = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();

    let id = if host == "redd.it" {
        segments.next()
    } else if host == "reddit.com" || host.ends_with(".reddit.com") {
        segments
            .by_ref()
            .position(|segment| segment == "comments" || segment == "gallery")
            .and_then(|_| segments.next())
    } else {
        return Err(invalid(locator, "not a reddit.com URL"));
    };

    let id = id.ok_or_else(|| invalid(locator, "no submission id in path"))?;
    if !is_base36(id) {
        return Err(invalid(locator, "submission id is not base36"));
    }

    Ok(id.to_ascii_lowercase())
}

fn is_base36(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn invalid(locator: &str, reason: &str) -> RedditError {
    RedditError::InvalidUrl {
        url: locator.to_string(),
        reason: reason.to_string(),
    }
}
