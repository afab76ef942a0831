//! URL construction utilities.
//!
//! This module turns wiki page titles and site-relative links into absolute
//! URLs under the configured wiki root.

use url::Url;

use crate::error::{WikiError, WikiResult};

/// Build the absolute URL for a wiki page title.
///
/// Spaces become underscores and every `/`-separated segment is
/// percent-encoded, so subpages like `Ahri/LoL` keep their separator.
pub fn page_url(base: &Url, title: &str) -> WikiResult<String> {
    let underscored = title.trim().replace(' ', "_");
    let encoded = underscored
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    base.join(&encoded)
        .map(String::from)
        .map_err(|source| WikiError::InvalidUrl {
            input: title.to_string(),
            source,
        })
}

/// Resolve a site-relative link (`/Item_One`) against the wiki root.
///
/// The leading slash is dropped so the link lands under the root's path
/// prefix (e.g. `/en-us/`) rather than the host root.
#[must_use]
pub fn resolve_site_path(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim_start_matches('/')).ok().map(String::from)
}

/// Normalize a base URL so relative joins append instead of replacing the
/// last path segment.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| anyhow::anyhow!("Failed to parse base URL '{raw}': {e}"))?;
    if !is_valid_url(url.as_str()) {
        anyhow::bail!("Base URL must use http or https: {raw}");
    }
    Ok(url)
}

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
