//! # webmimic
//!
//! Browser network-fingerprint profiles for Rust HTTP clients.
//!
//! `webmimic` produces the wire-level artifacts that passive fingerprinting
//! inspects, for a chosen browser and operating system: the TLS ClientHello
//! shape, HTTP/2 connection parameters, header values and order, and
//! multipart boundaries. It performs no I/O; a TLS stack and an HTTP/2
//! transport consume the profile.
//!
//! ## Features
//!
//! - **TLS tables**: cipher, extension and parameter order for Chrome 131,
//!   Firefox 131 and Firefox 131 private browsing
//! - **HTTP/2 profiles**: SETTINGS order, connection window, stream priority
//!   and PRIORITY frames
//! - **Header ordering**: per-method templates with browser defaults
//! - **Boundaries**: WebKit and Gecko multipart boundary algorithms
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use webmimic::emulation::ClientConfig;
//! use webmimic::http::OrderedHeaderMap;
//!
//! let mut config = ClientConfig::new();
//! config.impersonate().random_os().chrome()?;
//!
//! let profile = config.emulation().expect("installed");
//! let headers = profile.arrange_headers(&OrderedHeaderMap::new(), &Method::GET);
//! assert_eq!(headers.names().next(), Some(":method"));
//!
//! let boundary = profile.boundary()?;
//! assert!(boundary.starts_with("----WebKitFormBoundary"));
//! # Ok::<(), webmimic::base::error::ImpersonateError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`emulation`] - Identity selection and profile assembly
//! - [`http`] - Header order, HTTP/2 profiles, boundaries, multipart bodies
//! - [`tls`] - ClientHello fingerprint tables

pub mod base;
pub mod emulation;
pub mod http;
pub mod tls;

pub use base::error::ImpersonateError;
pub use emulation::{Browser, ClientConfig, Emulation, Identity, OperatingSystem};
