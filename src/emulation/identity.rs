//! Identity types: which browser on which operating system.
//!
//! An [`Identity`] fully determines every artifact this crate produces. The
//! set of identities is closed, so everything downstream is a pure function of
//! these enums.

use crate::base::error::ImpersonateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Operating System
// =============================================================================

/// Target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// Windows 10/11, x64.
    #[default]
    Windows,
    /// macOS on Intel.
    #[serde(rename = "macos")]
    MacOS,
    /// Desktop Linux, x86_64.
    Linux,
    /// Android phone.
    Android,
    /// iPhone.
    Ios,
}

impl OperatingSystem {
    /// Every supported operating system, in selection order.
    pub const ALL: [OperatingSystem; 5] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOS,
        OperatingSystem::Linux,
        OperatingSystem::Android,
        OperatingSystem::Ios,
    ];

    /// Check if this is a mobile platform.
    pub const fn is_mobile(self) -> bool {
        matches!(self, OperatingSystem::Android | OperatingSystem::Ios)
    }

    /// Structured-header boolean for `Sec-CH-UA-Mobile`.
    pub const fn mobile(self) -> &'static str {
        if self.is_mobile() {
            "?1"
        } else {
            "?0"
        }
    }

    /// Quoted platform string for `Sec-CH-UA-Platform`.
    pub const fn platform(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "\"Windows\"",
            OperatingSystem::MacOS => "\"macOS\"",
            OperatingSystem::Linux => "\"Linux\"",
            OperatingSystem::Android => "\"Android\"",
            OperatingSystem::Ios => "\"iOS\"",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
        };
        write!(f, "{name}")
    }
}

impl FromStr for OperatingSystem {
    type Err = ImpersonateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(OperatingSystem::Windows),
            "macos" | "mac" | "osx" => Ok(OperatingSystem::MacOS),
            "linux" => Ok(OperatingSystem::Linux),
            "android" => Ok(OperatingSystem::Android),
            "ios" | "iphone" => Ok(OperatingSystem::Ios),
            _ => Err(ImpersonateError::UnknownOs(s.to_string())),
        }
    }
}

// =============================================================================
// Browser
// =============================================================================

/// Target browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Browser {
    /// Google Chrome (Blink).
    #[default]
    Chrome,
    /// Mozilla Firefox (Gecko).
    Firefox,
}

impl Browser {
    /// All supported browsers.
    pub const ALL: [Browser; 2] = [Browser::Chrome, Browser::Firefox];

    /// Release the tables are authored against.
    pub const fn default_version(self) -> BrowserVersion {
        match self {
            Browser::Chrome => BrowserVersion::new(131),
            Browser::Firefox => BrowserVersion::new(131),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Browser {
    type Err = ImpersonateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" | "ff" => Ok(Browser::Firefox),
            _ => Err(ImpersonateError::UnknownBrowser(s.to_string())),
        }
    }
}

// =============================================================================
// Browser Version
// =============================================================================

/// Released browser version a fingerprint table entry is keyed by.
///
/// Private browsing is tracked separately because Firefox changes its
/// ClientHello shape in private windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserVersion {
    /// Major release number.
    pub major: u16,
    /// Private-browsing variant.
    #[serde(default)]
    pub private: bool,
}

impl BrowserVersion {
    pub const fn new(major: u16) -> Self {
        Self {
            major,
            private: false,
        }
    }

    pub const fn private(major: u16) -> Self {
        Self {
            major,
            private: true,
        }
    }
}

impl fmt::Display for BrowserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.private {
            write!(f, "{}-private", self.major)
        } else {
            write!(f, "{}", self.major)
        }
    }
}

impl FromStr for BrowserVersion {
    type Err = ImpersonateError;

    /// Parses `"131"` or `"131-private"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, private) = match s.strip_suffix("-private") {
            Some(major) => (major, true),
            None => (s, false),
        };
        let major = major
            .parse::<u16>()
            .map_err(|_| ImpersonateError::InvalidVersion(s.to_string()))?;
        Ok(Self { major, private })
    }
}

// =============================================================================
// Identity
// =============================================================================

/// A (browser, operating system) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Identity {
    pub browser: Browser,
    pub os: OperatingSystem,
}

impl Identity {
    pub const fn new(browser: Browser, os: OperatingSystem) -> Self {
        Self { browser, os }
    }

    /// Check if this identity presents as a mobile client.
    pub const fn is_mobile(&self) -> bool {
        self.os.is_mobile()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.browser, self.os)
    }
}

impl FromStr for Identity {
    type Err = ImpersonateError;

    /// Parses `"chrome/windows"`; a bare browser name defaults to Windows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((browser, os)) => Ok(Self::new(browser.parse()?, os.parse()?)),
            None => Ok(Self::new(s.parse()?, OperatingSystem::default())),
        }
    }
}
