//! Per-browser header values.
//!
//! Each profile provides the headers sent on every request (user agent,
//! client hints, encodings, placeholders) and the extra defaults injected per
//! HTTP method. Only GET and POST have method defaults.

pub mod chrome;
pub mod firefox;

use crate::emulation::{Browser, OperatingSystem};
use crate::http::OrderedHeaderMap;
use http::Method;

/// User agent for a browser on `os`.
pub const fn user_agent(browser: Browser, os: OperatingSystem) -> &'static str {
    match browser {
        Browser::Chrome => chrome::user_agent(os),
        Browser::Firefox => firefox::user_agent(os),
    }
}

/// Headers the browser sends on every request from `os`.
pub fn default_headers(browser: Browser, os: OperatingSystem) -> OrderedHeaderMap {
    match browser {
        Browser::Chrome => chrome::default_headers(os),
        Browser::Firefox => firefox::default_headers(os),
    }
}

/// Defaults injected for `method`, before ordering.
pub fn method_defaults(browser: Browser, method: &Method) -> &'static [(&'static str, &'static str)] {
    match (browser, method.as_str()) {
        (Browser::Chrome, "GET") => chrome::GET_DEFAULTS,
        (Browser::Chrome, "POST") => chrome::POST_DEFAULTS,
        (Browser::Firefox, "GET") => firefox::GET_DEFAULTS,
        (Browser::Firefox, "POST") => firefox::POST_DEFAULTS,
        _ => &[],
    }
}
