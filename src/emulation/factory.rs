//! Emulation factory and core types.

use crate::base::error::ImpersonateError;
use crate::emulation::{profiles, Browser, BrowserVersion, Identity, OperatingSystem};
use crate::http::boundary::BoundaryGenerator;
use crate::http::h2fingerprint::Http2Profile;
use crate::http::headerorder;
use crate::http::orderedheaders::{self, OrderedHeaderMap};
use crate::tls::{self, TlsFingerprintSpec};
use http::Method;
use serde::Serialize;

/// Factory trait for creating emulation configurations.
///
/// Implemented by anything that pins down a browser identity.
pub trait EmulationFactory {
    /// Assemble an [`Emulation`] from this factory.
    fn emulation(self) -> Result<Emulation, ImpersonateError>;
}

/// Builder for [`Emulation`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct EmulationBuilder {
    identity: Identity,
    version: Option<BrowserVersion>,
}

/// A finalized browser profile.
///
/// Combines:
/// - TLS ClientHello table entry
/// - HTTP/2 connection profile
/// - Default headers for the operating system
/// - Multipart boundary algorithm
///
/// Read-only after assembly; share it freely.
#[derive(Debug, Clone, Serialize)]
pub struct Emulation {
    identity: Identity,
    version: BrowserVersion,
    tls: &'static TlsFingerprintSpec,
    http2: &'static Http2Profile,
    headers: OrderedHeaderMap,
    boundary: BoundaryGenerator,
}

impl Emulation {
    /// Create a new builder.
    #[inline]
    pub fn builder() -> EmulationBuilder {
        EmulationBuilder::default()
    }

    #[inline]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    #[inline]
    pub fn browser(&self) -> Browser {
        self.identity.browser
    }

    #[inline]
    pub fn os(&self) -> OperatingSystem {
        self.identity.os
    }

    #[inline]
    pub fn version(&self) -> BrowserVersion {
        self.version
    }

    /// ClientHello shape for the TLS collaborator.
    #[inline]
    pub fn tls_spec(&self) -> &'static TlsFingerprintSpec {
        self.tls
    }

    /// Connection parameters for the HTTP/2 collaborator.
    #[inline]
    pub fn http2_profile(&self) -> &'static Http2Profile {
        self.http2
    }

    /// Headers sent on every request, before per-method defaults.
    #[inline]
    pub fn headers(&self) -> &OrderedHeaderMap {
        &self.headers
    }

    #[inline]
    pub fn user_agent(&self) -> &str {
        self.headers.get("user-agent").unwrap_or_default()
    }

    #[inline]
    pub fn boundary_generator(&self) -> BoundaryGenerator {
        self.boundary
    }

    /// Pseudo-header order on the wire.
    pub fn pseudo_order(&self) -> [&'static str; 4] {
        headerorder::pseudo_order(self.identity.browser)
    }

    /// Order a request's headers as this browser would send them.
    ///
    /// Caller-supplied values take precedence over every default. Base
    /// defaults are appended after the caller's headers, so names outside the
    /// template keep caller-first order among themselves.
    pub fn arrange_headers(&self, headers: &OrderedHeaderMap, method: &Method) -> OrderedHeaderMap {
        let mut merged = headers.clone();
        for (name, value) in self.headers.iter() {
            merged.set_trusted_default(name, value);
        }
        orderedheaders::arrange(self.identity.browser, &merged, method)
    }

    /// Fresh multipart boundary in this browser's format.
    pub fn boundary(&self) -> Result<String, ImpersonateError> {
        self.boundary.generate()
    }

    /// Pretty-printed JSON of every table in the profile.
    pub fn to_json(&self) -> Result<String, ImpersonateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decompose into parts.
    pub fn into_parts(
        self,
    ) -> (
        &'static TlsFingerprintSpec,
        &'static Http2Profile,
        OrderedHeaderMap,
        BoundaryGenerator,
    ) {
        (self.tls, self.http2, self.headers, self.boundary)
    }
}

impl EmulationBuilder {
    #[inline]
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    #[inline]
    pub fn browser(mut self, browser: Browser) -> Self {
        self.identity.browser = browser;
        self
    }

    #[inline]
    pub fn os(mut self, os: OperatingSystem) -> Self {
        self.identity.os = os;
        self
    }

    /// Pin a release. Defaults to the browser's current version.
    #[inline]
    pub fn version(mut self, version: BrowserVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Look up every table for the identity and assemble the profile.
    pub fn build(self) -> Result<Emulation, ImpersonateError> {
        let Identity { browser, os } = self.identity;
        let version = self.version.unwrap_or(browser.default_version());

        let tls = tls::spec(browser, version)?;
        let http2 = Http2Profile::for_browser(browser);
        let headers = profiles::default_headers(browser, os);
        let boundary = BoundaryGenerator::for_browser(browser);

        tracing::debug!(
            browser = %browser,
            os = %os,
            version = %version,
            tls = tls.name,
            "assembled emulation profile"
        );

        Ok(Emulation {
            identity: self.identity,
            version,
            tls,
            http2,
            headers,
            boundary,
        })
    }
}

// EmulationFactory implementations

impl EmulationFactory for Emulation {
    #[inline]
    fn emulation(self) -> Result<Emulation, ImpersonateError> {
        Ok(self)
    }
}

impl EmulationFactory for EmulationBuilder {
    #[inline]
    fn emulation(self) -> Result<Emulation, ImpersonateError> {
        self.build()
    }
}

impl EmulationFactory for Identity {
    #[inline]
    fn emulation(self) -> Result<Emulation, ImpersonateError> {
        Emulation::builder().identity(self).build()
    }
}

impl EmulationFactory for Browser {
    #[inline]
    fn emulation(self) -> Result<Emulation, ImpersonateError> {
        Emulation::builder().browser(self).build()
    }
}

impl EmulationFactory for (Browser, BrowserVersion) {
    #[inline]
    fn emulation(self) -> Result<Emulation, ImpersonateError> {
        Emulation::builder().browser(self.0).version(self.1).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let emu = Emulation::builder().build().unwrap();
        assert_eq!(emu.browser(), Browser::Chrome);
        assert_eq!(emu.os(), OperatingSystem::Windows);
        assert_eq!(emu.version(), BrowserVersion::new(131));
        assert_eq!(emu.boundary_generator(), BoundaryGenerator::WebKit);
    }

    #[test]
    fn test_unsupported_version() {
        let err = Emulation::builder()
            .browser(Browser::Chrome)
            .version(BrowserVersion::private(131))
            .build()
            .unwrap_err();
        assert!(matches!(err, ImpersonateError::UnsupportedIdentity { .. }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_firefox_private() {
        let emu = (Browser::Firefox, BrowserVersion::private(131))
            .emulation()
            .unwrap();
        assert!(emu.version().private);
        assert!(emu.tls_spec().name.contains("private"));
    }

    #[test]
    fn test_factory_impls_agree() {
        let identity = Identity::new(Browser::Firefox, OperatingSystem::Linux);
        let a = identity.emulation().unwrap();
        let b = Emulation::builder()
            .browser(Browser::Firefox)
            .os(OperatingSystem::Linux)
            .emulation()
            .unwrap();
        assert_eq!(a.headers(), b.headers());
        assert!(std::ptr::eq(a.tls_spec(), b.tls_spec()));
        assert!(std::ptr::eq(a.http2_profile(), b.http2_profile()));
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let emu = Browser::Chrome.emulation().unwrap();
        let mut headers = OrderedHeaderMap::new();
        headers.insert("User-Agent", "custom").unwrap();
        let out = emu.arrange_headers(&headers, &Method::GET);
        assert_eq!(out.get("user-agent"), Some("custom"));
        assert_eq!(out.get("sec-ch-ua-mobile"), Some("?0"));
    }

    #[test]
    fn test_unlisted_caller_header_precedes_unlisted_default() {
        // origin is a base default outside Chrome's GET template.
        let emu = Browser::Chrome.emulation().unwrap();
        let mut headers = OrderedHeaderMap::new();
        headers.insert("x-requested-with", "XMLHttpRequest").unwrap();
        let out = emu.arrange_headers(&headers, &Method::GET);
        let names: Vec<_> = out.names().collect();
        assert_eq!(names[4..6], ["x-requested-with", "origin"]);
    }

    #[test]
    fn test_to_json() {
        let emu = Identity::new(Browser::Chrome, OperatingSystem::Ios)
            .emulation()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&emu.to_json().unwrap()).unwrap();
        assert_eq!(value["identity"]["os"], "ios");
        assert_eq!(value["boundary"], "webkit");
        assert_eq!(value["tls"]["name"], "Chrome 131");
        assert_eq!(value["headers"][0][0], ":authority");
    }

    #[test]
    fn test_user_agent() {
        let emu = Identity::new(Browser::Firefox, OperatingSystem::Android)
            .emulation()
            .unwrap();
        assert!(emu.user_agent().contains("Android"));
    }
}
