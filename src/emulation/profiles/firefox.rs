//! Firefox 131 header values.

use crate::emulation::OperatingSystem;
use crate::http::headerorder::{AUTHORITY, METHOD, PATH, SCHEME};
use crate::http::OrderedHeaderMap;

/// User agent of Firefox 131 on `os`.
pub const fn user_agent(os: OperatingSystem) -> &'static str {
    match os {
        OperatingSystem::Windows => {
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:131.0) Gecko/20100101 Firefox/131.0"
        }
        OperatingSystem::MacOS => {
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:131.0) Gecko/20100101 Firefox/131.0"
        }
        OperatingSystem::Linux => {
            "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0"
        }
        OperatingSystem::Android => {
            "Mozilla/5.0 (Android 14; Mobile; rv:131.0) Gecko/131.0 Firefox/131.0"
        }
        OperatingSystem::Ios => {
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_7 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/131.0 Mobile/15E148 Safari/605.1.15"
        }
    }
}

/// Headers present on every Firefox request. Firefox sends no client hints.
pub fn default_headers(os: OperatingSystem) -> OrderedHeaderMap {
    let mut headers = OrderedHeaderMap::with_capacity(11);
    headers.set_trusted_default(AUTHORITY, "");
    headers.set_trusted_default(METHOD, "");
    headers.set_trusted_default(PATH, "");
    headers.set_trusted_default(SCHEME, "");
    headers.set_trusted_default("accept-encoding", "gzip, deflate, br, zstd");
    headers.set_trusted_default("accept-language", "en-US,en;q=0.5");
    headers.set_trusted_default("authorization", "");
    headers.set_trusted_default("cookie", "");
    headers.set_trusted_default("origin", "");
    headers.set_trusted_default("referer", "");
    headers.set_trusted_default("user-agent", user_agent(os));
    headers
}

pub(crate) const GET_DEFAULTS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/png,image/svg+xml,*/*;q=0.8",
    ),
    ("priority", "u=0, i"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
];

pub(crate) const POST_DEFAULTS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    ("cache-control", "no-cache"),
    ("content-type", ""),
    ("pragma", "no-cache"),
    ("priority", "u=1, i"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
];
