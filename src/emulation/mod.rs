//! Browser emulation module.
//!
//! Pins a (browser, operating system) identity and assembles every
//! wire-level artifact for it:
//! - TLS ClientHello table entry
//! - HTTP/2 connection profile (settings, window, priorities)
//! - Default headers and their per-method order
//! - Multipart boundary algorithm

mod factory;
mod identity;
pub mod impersonate;
pub mod profiles;

pub use factory::{Emulation, EmulationBuilder, EmulationFactory};
pub use identity::{Browser, BrowserVersion, Identity, OperatingSystem};
pub use impersonate::{ClientConfig, Impersonate};
