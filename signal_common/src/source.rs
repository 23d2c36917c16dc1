//! Data source location rules shared by the dashboard crates.
//!
//! The snapshot lives next to the dashboard page. On a hosted-pages deployment the
//! site is served under a path prefix named after the repository, so the data URL
//! is rebuilt from the host and the first path segment instead of being resolved
//! relative to the page.
use url::Url;

use crate::error::DashboardError;

/// Default snapshot location, relative to the page.
pub const DEFAULT_DATA_PATH: &str = "data/signal.json";
/// Host name marker of a hosted-pages deployment.
pub const HOSTED_PAGES_HOST: &str = "github.io";
/// Query parameter used to defeat HTTP caching.
pub const CACHE_BUST_PARAM: &str = "v";

/// Returns `true` if the page is served from a hosted-pages host.
pub fn is_hosted_pages(page_url: &Url) -> bool {
    page_url
        .host_str()
        .map(|host| host.contains(HOSTED_PAGES_HOST))
        .unwrap_or(false)
}

/// Resolves the snapshot URL for a dashboard served at `page_url`.
pub fn resolve_data_url(page_url: &Url, data_path: &str) -> Result<Url, DashboardError> {
    if is_hosted_pages(page_url) {
        let host = page_url.host_str().unwrap_or_default();
        let repo = page_url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or_default();
        let path = data_path.trim_start_matches('/');
        let raw = if repo.is_empty() {
            format!("https://{}/{}", host, path)
        } else {
            format!("https://{}/{}/{}", host, repo, path)
        };
        return Url::parse(&raw).map_err(|e| DashboardError::InvalidUrl(format!("{}: {}", raw, e)));
    }

    page_url
        .join(data_path)
        .map_err(|e| DashboardError::InvalidUrl(format!("{} + {}: {}", page_url, data_path, e)))
}

/// Appends the cache-busting `v=<epoch_millis>` pair, keeping existing query pairs.
pub fn with_cache_buster(url: &Url, epoch_millis: i64) -> Url {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair(CACHE_BUST_PARAM, &epoch_millis.to_string());
    busted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn relative_path_resolves_against_page() {
        let data = resolve_data_url(&url("http://localhost:8000/"), DEFAULT_DATA_PATH).unwrap();
        assert_eq!(data.as_str(), "http://localhost:8000/data/signal.json");
    }

    #[test]
    fn relative_path_resolves_against_page_directory() {
        let page = url("http://example.com/dash/index.html");
        let data = resolve_data_url(&page, DEFAULT_DATA_PATH).unwrap();
        assert_eq!(data.as_str(), "http://example.com/dash/data/signal.json");
    }

    #[test]
    fn hosted_pages_uses_first_path_segment() {
        let page = url("http://trader.github.io/nse-signals/dashboard/index.html");
        assert!(is_hosted_pages(&page));
        let data = resolve_data_url(&page, DEFAULT_DATA_PATH).unwrap();
        assert_eq!(data.as_str(), "https://trader.github.io/nse-signals/data/signal.json");
    }

    #[test]
    fn hosted_pages_root_skips_empty_segment() {
        let data = resolve_data_url(&url("https://trader.github.io/"), DEFAULT_DATA_PATH).unwrap();
        assert_eq!(data.as_str(), "https://trader.github.io/data/signal.json");
    }

    #[test]
    fn other_hosts_are_not_hosted_pages() {
        assert!(!is_hosted_pages(&url("https://signals.example.org/repo/")));
        assert!(!is_hosted_pages(&url("file:///tmp/index.html")));
    }

    #[test]
    fn cache_buster_is_appended() {
        let busted = with_cache_buster(&url("http://localhost/data/signal.json"), 1_700_000_000_123);
        assert_eq!(busted.as_str(), "http://localhost/data/signal.json?v=1700000000123");
    }

    #[test]
    fn cache_buster_keeps_existing_query() {
        let busted = with_cache_buster(&url("http://localhost/data/signal.json?env=prod"), 7);
        assert_eq!(busted.query(), Some("env=prod&v=7"));
    }
}
