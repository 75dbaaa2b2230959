//! Identity selection on a client configuration.
//!
//! ```
//! use webmimic::emulation::{ClientConfig, OperatingSystem};
//!
//! let mut config = ClientConfig::new();
//! config.impersonate().android().chrome()?;
//!
//! let emulation = config.emulation().expect("profile installed");
//! assert_eq!(emulation.os(), OperatingSystem::Android);
//! # Ok::<(), webmimic::base::error::ImpersonateError>(())
//! ```

use crate::base::error::ImpersonateError;
use crate::emulation::{Browser, BrowserVersion, Emulation, EmulationFactory, OperatingSystem};
use rand::seq::SliceRandom;
use rand::Rng;

/// Owning client configuration the selected profile is installed into.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    browser: Option<Browser>,
    emulation: Option<Emulation>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start selecting an identity. The OS defaults to Windows.
    pub fn impersonate(&mut self) -> Impersonate<'_> {
        Impersonate {
            config: self,
            os: OperatingSystem::default(),
            version: None,
        }
    }

    /// Browser whose protocol negotiation the transport should follow
    /// (for example when deciding on an HTTP/3 upgrade).
    pub fn negotiated_protocol_hint(&self) -> Option<Browser> {
        self.browser
    }

    /// The installed profile, if any.
    pub fn emulation(&self) -> Option<&Emulation> {
        self.emulation.as_ref()
    }

    /// Install a profile from any factory.
    ///
    /// On error the previously installed profile is kept.
    pub fn set_emulation<F: EmulationFactory>(
        &mut self,
        factory: F,
    ) -> Result<&mut Self, ImpersonateError> {
        let emulation = factory.emulation()?;
        self.browser = Some(emulation.browser());
        self.emulation = Some(emulation);
        Ok(self)
    }
}

/// Identity selector bound to a [`ClientConfig`].
///
/// OS selectors may be called any number of times; the last one wins. A
/// browser method finishes the selection and installs the profile.
#[derive(Debug)]
#[must_use]
pub struct Impersonate<'a> {
    config: &'a mut ClientConfig,
    os: OperatingSystem,
    version: Option<BrowserVersion>,
}

impl<'a> Impersonate<'a> {
    pub fn os(mut self, os: OperatingSystem) -> Self {
        self.os = os;
        self
    }

    pub fn windows(self) -> Self {
        self.os(OperatingSystem::Windows)
    }

    pub fn macos(self) -> Self {
        self.os(OperatingSystem::MacOS)
    }

    pub fn linux(self) -> Self {
        self.os(OperatingSystem::Linux)
    }

    pub fn android(self) -> Self {
        self.os(OperatingSystem::Android)
    }

    pub fn ios(self) -> Self {
        self.os(OperatingSystem::Ios)
    }

    /// Pick an OS uniformly at random, replacing any earlier choice.
    pub fn random_os(self) -> Self {
        self.random_os_with(&mut rand::thread_rng())
    }

    /// [`Impersonate::random_os`] with a caller-supplied generator.
    pub fn random_os_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        if let Some(&os) = OperatingSystem::ALL.choose(rng) {
            self.os = os;
        }
        tracing::debug!(os = %self.os, "selected random OS");
        self
    }

    /// Pin a browser release instead of the browser's current version.
    pub fn version(mut self, version: BrowserVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Currently selected OS.
    pub fn selected_os(&self) -> OperatingSystem {
        self.os
    }

    /// Impersonate Chrome on the selected OS.
    pub fn chrome(self) -> Result<&'a mut ClientConfig, ImpersonateError> {
        self.finish(Browser::Chrome)
    }

    /// Impersonate Firefox on the selected OS.
    pub fn firefox(self) -> Result<&'a mut ClientConfig, ImpersonateError> {
        self.finish(Browser::Firefox)
    }

    fn finish(self, browser: Browser) -> Result<&'a mut ClientConfig, ImpersonateError> {
        let Impersonate {
            config,
            os,
            version,
        } = self;
        let mut builder = Emulation::builder().browser(browser).os(os);
        if let Some(version) = version {
            builder = builder.version(version);
        }
        config.set_emulation(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_os_is_windows() {
        let mut config = ClientConfig::new();
        config.impersonate().chrome().unwrap();
        assert_eq!(config.emulation().unwrap().os(), OperatingSystem::Windows);
        assert_eq!(config.negotiated_protocol_hint(), Some(Browser::Chrome));
    }

    #[test]
    fn test_last_os_wins() {
        let mut config = ClientConfig::new();
        config.impersonate().ios().linux().firefox().unwrap();
        let emu = config.emulation().unwrap();
        assert_eq!(emu.os(), OperatingSystem::Linux);
        assert_eq!(emu.browser(), Browser::Firefox);
    }

    #[test]
    fn test_random_os_overrides_explicit() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut config = ClientConfig::new();
        let selector = config.impersonate().macos().random_os_with(&mut rng);
        assert!(OperatingSystem::ALL.contains(&selector.selected_os()));
    }

    #[test]
    fn test_failed_selection_keeps_previous_profile() {
        let mut config = ClientConfig::new();
        config.impersonate().android().chrome().unwrap();

        let err = config
            .impersonate()
            .version(BrowserVersion::new(99))
            .firefox()
            .unwrap_err();
        assert!(matches!(err, ImpersonateError::UnsupportedIdentity { .. }));

        assert_eq!(config.negotiated_protocol_hint(), Some(Browser::Chrome));
        assert_eq!(config.emulation().unwrap().os(), OperatingSystem::Android);
    }

    #[test]
    fn test_firefox_private_version() {
        let mut config = ClientConfig::new();
        config
            .impersonate()
            .version(BrowserVersion::private(131))
            .firefox()
            .unwrap();
        assert!(config.emulation().unwrap().version().private);
    }
}
