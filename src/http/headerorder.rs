//! Per-browser header name templates.
//!
//! Each browser has one ordered name list per HTTP method: the four
//! pseudo-headers first, in the browser's order, then regular headers by
//! rank. Methods without a template use the browser's GET template.

use crate::emulation::Browser;
use http::Method;

pub const METHOD: &str = ":method";
pub const AUTHORITY: &str = ":authority";
pub const SCHEME: &str = ":scheme";
pub const PATH: &str = ":path";

/// The four request pseudo-headers.
pub const PSEUDO_HEADERS: [&str; 4] = [METHOD, AUTHORITY, SCHEME, PATH];

/// Check if a (lowercase) name is a pseudo-header.
pub fn is_pseudo(name: &str) -> bool {
    name.starts_with(':')
}

const CHROME_GET: &[&str] = &[
    METHOD,
    AUTHORITY,
    SCHEME,
    PATH,
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "authorization",
    "upgrade-insecure-requests",
    "user-agent",
    "accept",
    "sec-fetch-site",
    "sec-fetch-mode",
    "sec-fetch-user",
    "sec-fetch-dest",
    "referer",
    "accept-encoding",
    "accept-language",
    "cookie",
    "priority",
];

const CHROME_POST: &[&str] = &[
    METHOD,
    AUTHORITY,
    SCHEME,
    PATH,
    "content-length",
    "pragma",
    "cache-control",
    "sec-ch-ua-platform",
    "authorization",
    "user-agent",
    "sec-ch-ua",
    "content-type",
    "sec-ch-ua-mobile",
    "accept",
    "origin",
    "sec-fetch-site",
    "sec-fetch-mode",
    "sec-fetch-dest",
    "referer",
    "accept-encoding",
    "accept-language",
    "cookie",
    "priority",
];

const FIREFOX_GET: &[&str] = &[
    METHOD,
    PATH,
    AUTHORITY,
    SCHEME,
    "user-agent",
    "accept",
    "accept-language",
    "accept-encoding",
    "referer",
    "authorization",
    "cookie",
    "upgrade-insecure-requests",
    "sec-fetch-dest",
    "sec-fetch-mode",
    "sec-fetch-site",
    "sec-fetch-user",
    "priority",
];

const FIREFOX_POST: &[&str] = &[
    METHOD,
    PATH,
    AUTHORITY,
    SCHEME,
    "user-agent",
    "accept",
    "accept-language",
    "accept-encoding",
    "referer",
    "content-type",
    "authorization",
    "content-length",
    "origin",
    "cookie",
    "sec-fetch-dest",
    "sec-fetch-mode",
    "sec-fetch-site",
    "priority",
    "pragma",
    "cache-control",
];

/// Ordered header names for a browser and method, falling back to GET.
pub fn template(browser: Browser, method: &Method) -> &'static [&'static str] {
    match (browser, *method == Method::POST) {
        (Browser::Chrome, true) => CHROME_POST,
        (Browser::Chrome, false) => CHROME_GET,
        (Browser::Firefox, true) => FIREFOX_POST,
        (Browser::Firefox, false) => FIREFOX_GET,
    }
}

/// Pseudo-header order for a browser (identical across its templates).
pub fn pseudo_order(browser: Browser) -> [&'static str; 4] {
    let mut order = PSEUDO_HEADERS;
    for (slot, name) in order
        .iter_mut()
        .zip(template(browser, &Method::GET).iter().filter(|n| is_pseudo(n)))
    {
        *slot = *name;
    }
    order
}

/// Sort key of a header name within a template.
///
/// Names missing from the template rank 0, the same as the first template
/// entry. Browsers tie-break these by insertion order; keep it that way.
pub fn rank(template: &[&str], name: &str) -> usize {
    template.iter().position(|n| *n == name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_first_in_every_template() {
        for browser in Browser::ALL {
            for method in [Method::GET, Method::POST] {
                let t = template(browser, &method);
                assert!(t[..4].iter().all(|n| is_pseudo(n)));
                assert!(t[4..].iter().all(|n| !is_pseudo(n)));
            }
        }
    }

    #[test]
    fn test_unlisted_method_falls_back_to_get() {
        for browser in Browser::ALL {
            let get = template(browser, &Method::GET);
            for method in [Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
                assert_eq!(template(browser, &method), get);
            }
            let custom = Method::from_bytes(b"PURGE").unwrap();
            assert_eq!(template(browser, &custom), get);
        }
    }

    #[test]
    fn test_pseudo_order() {
        assert_eq!(
            pseudo_order(Browser::Chrome),
            [":method", ":authority", ":scheme", ":path"]
        );
        assert_eq!(
            pseudo_order(Browser::Firefox),
            [":method", ":path", ":authority", ":scheme"]
        );
    }

    #[test]
    fn test_rank_of_unlisted_is_zero() {
        let t = template(Browser::Chrome, &Method::GET);
        assert_eq!(rank(t, ":method"), 0);
        assert_eq!(rank(t, "x-custom"), 0);
        assert_eq!(rank(t, "priority"), t.len() - 1);
    }

    #[test]
    fn test_templates_have_no_duplicates() {
        for browser in Browser::ALL {
            for method in [Method::GET, Method::POST] {
                let t = template(browser, &method);
                for (i, name) in t.iter().enumerate() {
                    assert!(!t[i + 1..].contains(name), "{browser} {method} {name}");
                }
            }
        }
    }
}
