use crate::base::error::ImpersonateError;
use crate::emulation::profiles;
use crate::emulation::Browser;
use crate::http::headerorder::{self, is_pseudo, PSEUDO_HEADERS};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use serde::Serialize;

/// A header map that strictly preserves insertion order.
///
/// Names are stored lowercase. Besides regular headers it accepts the four
/// HTTP/2 pseudo-headers, which the transport fills in on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedHeaderMap {
    headers: Vec<(String, String)>,
}

impl OrderedHeaderMap {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            headers: Vec::with_capacity(capacity),
        }
    }

    /// Insert or update a header. Updates keep the original position.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<(), ImpersonateError> {
        let name = validate(name, value)?;
        if let Some((_, v)) = self.headers.iter_mut().find(|(n, _)| *n == name) {
            *v = value.to_owned();
        } else {
            self.headers.push((name, value.to_owned()));
        }
        Ok(())
    }

    /// Insert only if the name is absent. Returns whether it was inserted.
    pub fn set_default(&mut self, name: &str, value: &str) -> Result<bool, ImpersonateError> {
        let name = validate(name, value)?;
        if self.contains(&name) {
            return Ok(false);
        }
        self.headers.push((name, value.to_owned()));
        Ok(true)
    }

    // Names and values from profile tables or another validated map.
    pub(crate) fn set_trusted_default(&mut self, name: &str, value: &str) {
        if !self.contains(name) {
            self.headers.push((name.to_owned(), value.to_owned()));
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self
            .headers
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.headers.remove(pos).1)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Headers in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|(n, _)| n.as_str())
    }

    /// Pseudo-headers in their current order.
    pub fn pseudo_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(n, _)| is_pseudo(n))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Regular headers with a value, as a standard `http::HeaderMap`.
    ///
    /// Pseudo-headers and empty placeholders are left to the transport.
    /// `http::HeaderMap` iterates in insertion order for distinct names.
    pub fn to_header_map(&self) -> Result<HeaderMap, ImpersonateError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            if is_pseudo(name) || value.is_empty() {
                continue;
            }
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ImpersonateError::InvalidHeaderName(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ImpersonateError::InvalidHeaderValue(name.clone()))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

impl<'a> IntoIterator for &'a OrderedHeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn validate(name: &str, value: &str) -> Result<String, ImpersonateError> {
    let lower = name.to_ascii_lowercase();
    if is_pseudo(&lower) {
        if !PSEUDO_HEADERS.contains(&lower.as_str()) {
            return Err(ImpersonateError::InvalidHeaderName(name.to_owned()));
        }
    } else if HeaderName::from_bytes(lower.as_bytes()).is_err() {
        return Err(ImpersonateError::InvalidHeaderName(name.to_owned()));
    }
    if HeaderValue::from_str(value).is_err() {
        return Err(ImpersonateError::InvalidHeaderValue(lower));
    }
    Ok(lower)
}

/// Order a request's headers the way `browser` sends them for `method`.
///
/// 1. Empty placeholders for the four pseudo-headers and the browser's
///    per-method defaults are merged in where the caller has not supplied the
///    name.
/// 2. A stable sort by template rank orders the result. Names outside the
///    template rank 0 and so keep their insertion position relative to the
///    template's first entry.
/// 3. Pseudo-headers are moved ahead of regular headers, keeping the sorted
///    relative order within each group.
pub fn arrange(browser: Browser, headers: &OrderedHeaderMap, method: &Method) -> OrderedHeaderMap {
    let mut merged = headers.clone();
    for name in PSEUDO_HEADERS {
        merged.set_trusted_default(name, "");
    }
    for &(name, value) in profiles::method_defaults(browser, method) {
        merged.set_trusted_default(name, value);
    }

    let template = headerorder::template(browser, method);
    let mut entries = merged.headers;
    entries.sort_by_key(|(name, _)| headerorder::rank(template, name));

    let (mut ordered, regular): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|(name, _)| is_pseudo(name));
    ordered.extend(regular);

    OrderedHeaderMap { headers: ordered }
}
