//! Header canonicalizer tests.

use http::Method;
use webmimic::emulation::Browser;
use webmimic::http::headerorder::{self, is_pseudo};
use webmimic::http::{arrange, OrderedHeaderMap};

fn methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
        Method::PATCH,
        Method::from_bytes(b"PROPFIND").unwrap(),
    ]
}

fn request_headers() -> OrderedHeaderMap {
    let mut headers = OrderedHeaderMap::new();
    headers.insert("X-Requested-With", "XMLHttpRequest").unwrap();
    headers.insert("Cookie", "session=abc").unwrap();
    headers.insert("Content-Length", "42").unwrap();
    headers.insert(":path", "/api").unwrap();
    headers.insert("User-Agent", "test").unwrap();
    headers.insert(":authority", "example.com").unwrap();
    headers.insert("Referer", "https://example.com/").unwrap();
    headers.insert(":scheme", "https").unwrap();
    headers.insert("Accept-Language", "de").unwrap();
    headers.insert(":method", "GET").unwrap();
    headers
}

#[test]
fn test_arrange_is_deterministic() {
    let headers = request_headers();
    for browser in Browser::ALL {
        for method in methods() {
            let a = arrange(browser, &headers, &method);
            let b = arrange(browser, &headers, &method);
            assert_eq!(
                a.iter().collect::<Vec<_>>(),
                b.iter().collect::<Vec<_>>(),
                "{browser} {method}"
            );
        }
    }
}

#[test]
fn test_pseudo_headers_first_in_browser_order() {
    let headers = request_headers();
    for browser in Browser::ALL {
        for method in methods() {
            let out = arrange(browser, &headers, &method);
            let names: Vec<_> = out.names().collect();
            assert_eq!(names[..4], headerorder::pseudo_order(browser), "{browser} {method}");
            assert!(names[4..].iter().all(|n| !is_pseudo(n)));
        }
    }
}

#[test]
fn test_pseudo_headers_present_without_caller_pseudo() {
    let mut headers = OrderedHeaderMap::new();
    headers.insert("Accept", "*/*").unwrap();
    headers.insert("X-Trace", "1").unwrap();

    for browser in Browser::ALL {
        for method in methods() {
            let out = arrange(browser, &headers, &method);
            let names: Vec<_> = out.names().collect();
            assert_eq!(names[..4], headerorder::pseudo_order(browser), "{browser} {method}");
            assert!(names[4..].iter().all(|n| !is_pseudo(n)));
            assert_eq!(out.pseudo_headers().count(), 4);
        }
    }
}

#[test]
fn test_unlisted_methods_use_get_order() {
    // Every name in the GET template, inserted back to front.
    let mut headers = OrderedHeaderMap::new();
    for browser in Browser::ALL {
        for name in headerorder::template(browser, &Method::GET).iter().rev() {
            headers.insert(name, "x").unwrap();
        }
    }

    for browser in Browser::ALL {
        let get: Vec<String> = arrange(browser, &headers, &Method::GET)
            .names()
            .map(String::from)
            .collect();
        for method in methods().into_iter().filter(|m| *m != Method::GET && *m != Method::POST) {
            let out: Vec<String> = arrange(browser, &headers, &method)
                .names()
                .map(String::from)
                .collect();
            assert_eq!(out, get, "{browser} {method}");
        }
    }
}

#[test]
fn test_unlisted_header_ranks_with_first_entry() {
    let mut headers = OrderedHeaderMap::new();
    headers.insert("accept", "*/*").unwrap();
    headers.insert("x-custom", "1").unwrap();

    let out = arrange(Browser::Chrome, &headers, &Method::GET);
    let names: Vec<_> = out.names().collect();

    // Sorted with rank 0, ahead of every ranked regular header.
    assert_eq!(names[..4], headerorder::pseudo_order(Browser::Chrome));
    assert_eq!(names[4], "x-custom");
    let accept = names.iter().position(|n| *n == "accept").unwrap();
    assert!(accept > 4);
    assert_eq!(names.last(), Some(&"priority"));
}

#[test]
fn test_post_order_and_defaults() {
    let mut headers = OrderedHeaderMap::new();
    headers.insert("content-type", "application/json").unwrap();
    headers.insert("content-length", "2").unwrap();

    let out = arrange(Browser::Chrome, &headers, &Method::POST);
    let names: Vec<_> = out.names().collect();
    assert_eq!(
        names,
        vec![
            ":method",
            ":authority",
            ":scheme",
            ":path",
            "content-length",
            "pragma",
            "cache-control",
            "content-type",
            "accept",
            "sec-fetch-site",
            "sec-fetch-mode",
            "sec-fetch-dest",
            "priority",
        ]
    );
    assert_eq!(out.get("content-type"), Some("application/json"));
    assert_eq!(out.get("priority"), Some("u=1, i"));
}

#[test]
fn test_firefox_post_ends_with_cache_headers() {
    let out = arrange(Browser::Firefox, &OrderedHeaderMap::new(), &Method::POST);
    let names: Vec<_> = out.names().collect();
    assert_eq!(&names[names.len() - 2..], &["pragma", "cache-control"]);
}

#[test]
fn test_case_insensitive_merge() {
    let mut headers = OrderedHeaderMap::new();
    headers.insert("ACCEPT", "application/json").unwrap();
    let out = arrange(Browser::Firefox, &headers, &Method::GET);
    assert_eq!(out.names().filter(|n| *n == "accept").count(), 1);
    assert_eq!(out.get("Accept"), Some("application/json"));
}
