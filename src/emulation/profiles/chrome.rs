//! Chrome 131 header values.

use crate::emulation::OperatingSystem;
use crate::http::headerorder::{AUTHORITY, METHOD, PATH, SCHEME};
use crate::http::OrderedHeaderMap;

/// `sec-ch-ua` brand list sent by Chrome 131.
pub const SEC_CH_UA: &str =
    "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\"";

/// User agent of Chrome 131 on `os`.
pub const fn user_agent(os: OperatingSystem) -> &'static str {
    match os {
        OperatingSystem::Windows => {
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        }
        OperatingSystem::MacOS => {
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        }
        OperatingSystem::Linux => {
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        }
        OperatingSystem::Android => {
            "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36"
        }
        OperatingSystem::Ios => {
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_7 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/131.0.6778.73 Mobile/15E148 Safari/604.1"
        }
    }
}

/// Headers present on every Chrome request. Empty values are placeholders
/// the transport fills or drops.
pub fn default_headers(os: OperatingSystem) -> OrderedHeaderMap {
    let mut headers = OrderedHeaderMap::with_capacity(14);
    headers.set_trusted_default(AUTHORITY, "");
    headers.set_trusted_default(METHOD, "");
    headers.set_trusted_default(PATH, "");
    headers.set_trusted_default(SCHEME, "");
    headers.set_trusted_default("accept-encoding", "gzip, deflate, br, zstd");
    headers.set_trusted_default("accept-language", "en-US,en;q=0.9");
    headers.set_trusted_default("authorization", "");
    headers.set_trusted_default("cookie", "");
    headers.set_trusted_default("origin", "");
    headers.set_trusted_default("referer", "");
    headers.set_trusted_default("sec-ch-ua", SEC_CH_UA);
    headers.set_trusted_default("sec-ch-ua-mobile", os.mobile());
    headers.set_trusted_default("sec-ch-ua-platform", os.platform());
    headers.set_trusted_default("user-agent", user_agent(os));
    headers
}

pub(crate) const GET_DEFAULTS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_user_agents() {
        for os in OperatingSystem::ALL {
            assert_eq!(user_agent(os).contains("Mobile"), os.is_mobile(), "{os}");
        }
    }

    #[test]
    fn test_client_hints_follow_os() {
        let headers = default_headers(OperatingSystem::Android);
        assert_eq!(headers.get("sec-ch-ua-mobile"), Some("?1"));
        assert_eq!(headers.get("sec-ch-ua-platform"), Some("\"Android\""));

        let headers = default_headers(OperatingSystem::MacOS);
        assert_eq!(headers.get("sec-ch-ua-mobile"), Some("?0"));
        assert_eq!(headers.get("sec-ch-ua-platform"), Some("\"macOS\""));
    }
}
