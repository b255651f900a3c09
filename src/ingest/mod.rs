/// Upstream feed adapters, one module per data.gov.sg environment feed.
///
/// Each adapter owns the feed's URL, its serde structures (field names
/// matching the upstream JSON exactly), and a pure `parse_*` function
/// that turns a response body into a typed document. Structurally
/// absent fields (no `items`, missing region keys, empty station lists)
/// are absorbed here via `#[serde(default)]` and surface downstream as
/// documented defaults — only malformed JSON is an error. This keeps
/// upstream schema drift isolated to one module per feed.

pub mod forecast;
pub mod outlook;
pub mod psi;
pub mod readings;
pub mod uv;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::model::FeedError;

/// Fetches a feed body over HTTP. The client carries the per-call
/// timeout, so a hung upstream surfaces as `FeedError::Transport` like
/// any other connection failure.
pub fn fetch_json(client: &reqwest::blocking::Client, url: &str) -> Result<String, FeedError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FeedError::Transport(format!(
            "{} returned HTTP {}",
            url,
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| FeedError::Transport(e.to_string()))
}
