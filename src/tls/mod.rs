//! TLS ClientHello fingerprint tables.
//!
//! Each entry byte-matches a released browser's handshake: cipher order,
//! extension order and every sub-parameter (groups, signature algorithms,
//! ALPN, key shares, ECH candidates). The handshake itself is performed by
//! the TLS stack that consumes these tables.

pub mod impersonate;
pub mod options;

pub use self::impersonate::{spec, supported};
pub use self::options::{
    HpkeSymmetricCipherSuite, Renegotiation, TlsExtension, TlsFingerprintSpec, GREASE_PLACEHOLDER,
};
