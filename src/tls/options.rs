//! ClientHello shape description.
//!
//! A [`TlsFingerprintSpec`] is an ordered description of everything a browser
//! puts into its ClientHello. The TLS collaborator reproduces it field by
//! field; order is the fingerprint, so nothing here sorts or deduplicates.

use serde::Serialize;

/// Placeholder for a GREASE value (RFC 8701). The handshake layer substitutes
/// a fresh reserved value per connection, keeping the position.
pub const GREASE_PLACEHOLDER: u16 = 0x0a0a;

/// Protocol versions.
pub mod versions {
    pub const TLS_1_0: u16 = 0x0301;
    pub const TLS_1_1: u16 = 0x0302;
    pub const TLS_1_2: u16 = 0x0303;
    pub const TLS_1_3: u16 = 0x0304;
}

/// Cipher suite identifiers.
pub mod cipher_suites {
    // TLS 1.3
    pub const TLS_AES_128_GCM_SHA256: u16 = 0x1301;
    pub const TLS_AES_256_GCM_SHA384: u16 = 0x1302;
    pub const TLS_CHACHA20_POLY1305_SHA256: u16 = 0x1303;

    // TLS 1.2 ECDHE
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;
    pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;
    pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;
    pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca9;
    pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256: u16 = 0xcca8;
    pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: u16 = 0xc009;
    pub const TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: u16 = 0xc00a;
    pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;
    pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;

    // Legacy RSA key exchange
    pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;
    pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;
    pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;
    pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;
}

/// Extension type codes.
pub mod extensions {
    pub const SERVER_NAME: u16 = 0x0000;
    pub const STATUS_REQUEST: u16 = 0x0005;
    pub const SUPPORTED_GROUPS: u16 = 0x000a;
    pub const EC_POINT_FORMATS: u16 = 0x000b;
    pub const SIGNATURE_ALGORITHMS: u16 = 0x000d;
    pub const ALPN: u16 = 0x0010;
    pub const SIGNED_CERTIFICATE_TIMESTAMP: u16 = 0x0012;
    pub const PADDING: u16 = 0x0015;
    pub const EXTENDED_MASTER_SECRET: u16 = 0x0017;
    pub const COMPRESS_CERTIFICATE: u16 = 0x001b;
    pub const RECORD_SIZE_LIMIT: u16 = 0x001c;
    pub const DELEGATED_CREDENTIALS: u16 = 0x0022;
    pub const SESSION_TICKET: u16 = 0x0023;
    pub const SUPPORTED_VERSIONS: u16 = 0x002b;
    pub const PSK_KEY_EXCHANGE_MODES: u16 = 0x002d;
    pub const KEY_SHARE: u16 = 0x0033;
    pub const APPLICATION_SETTINGS: u16 = 0x4469;
    pub const ENCRYPTED_CLIENT_HELLO: u16 = 0xfe0d;
    pub const RENEGOTIATION_INFO: u16 = 0xff01;
}

/// Named groups.
pub mod groups {
    pub const SECP256R1: u16 = 0x0017;
    pub const SECP384R1: u16 = 0x0018;
    pub const SECP521R1: u16 = 0x0019;
    pub const X25519: u16 = 0x001d;
    pub const FFDHE2048: u16 = 0x0100;
    pub const FFDHE3072: u16 = 0x0101;
    pub const X25519_MLKEM768: u16 = 0x11ec;
}

/// Signature schemes.
pub mod signature_algorithms {
    pub const RSA_PKCS1_SHA1: u16 = 0x0201;
    pub const ECDSA_SHA1: u16 = 0x0203;
    pub const RSA_PKCS1_SHA256: u16 = 0x0401;
    pub const ECDSA_SECP256R1_SHA256: u16 = 0x0403;
    pub const RSA_PKCS1_SHA384: u16 = 0x0501;
    pub const ECDSA_SECP384R1_SHA384: u16 = 0x0503;
    pub const RSA_PKCS1_SHA512: u16 = 0x0601;
    pub const ECDSA_SECP521R1_SHA512: u16 = 0x0603;
    pub const RSA_PSS_RSAE_SHA256: u16 = 0x0804;
    pub const RSA_PSS_RSAE_SHA384: u16 = 0x0805;
    pub const RSA_PSS_RSAE_SHA512: u16 = 0x0806;
}

/// Certificate compression algorithms (RFC 8879).
pub mod cert_compression {
    pub const ZLIB: u16 = 0x0001;
    pub const BROTLI: u16 = 0x0002;
    pub const ZSTD: u16 = 0x0003;
}

/// HPKE identifiers used in ECH cipher suite candidates.
pub mod hpke {
    pub const KDF_HKDF_SHA256: u16 = 0x0001;
    pub const AEAD_AES_128_GCM: u16 = 0x0001;
    pub const AEAD_AES_256_GCM: u16 = 0x0002;
    pub const AEAD_CHACHA20_POLY1305: u16 = 0x0003;
}

/// `psk_dhe_ke` key exchange mode.
pub const PSK_MODE_DHE: u8 = 0x01;

/// Uncompressed EC point format.
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0x00;

/// Null compression method.
pub const COMPRESSION_NULL: u8 = 0x00;

/// Renegotiation support advertised in `renegotiation_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Renegotiation {
    Never,
    OnceAsClient,
    FreelyAsClient,
}

/// HPKE symmetric cipher suite offered in a GREASE ECH extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HpkeSymmetricCipherSuite {
    pub kdf_id: u16,
    pub aead_id: u16,
}

/// One ClientHello extension with its type-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TlsExtension {
    /// GREASE extension; id chosen at handshake time.
    Grease,
    ServerName,
    ExtendedMasterSecret,
    RenegotiationInfo(Renegotiation),
    /// Supported groups, GREASE placeholders kept in position.
    SupportedGroups(&'static [u16]),
    EcPointFormats(&'static [u8]),
    SessionTicket,
    Alpn(&'static [&'static str]),
    StatusRequest,
    SignatureAlgorithms(&'static [u16]),
    DelegatedCredentials(&'static [u16]),
    SignedCertificateTimestamp,
    /// Groups to generate key shares for.
    KeyShare(&'static [u16]),
    PskKeyExchangeModes(&'static [u8]),
    SupportedVersions(&'static [u16]),
    CompressCertificate(&'static [u16]),
    /// ALPS with the old (0x4469) codepoint.
    ApplicationSettings(&'static [&'static str]),
    RecordSizeLimit(u16),
    /// GREASE encrypted_client_hello with candidate suites and payload length hints.
    GreaseEch {
        cipher_suites: &'static [HpkeSymmetricCipherSuite],
        payload_lengths: &'static [u16],
    },
    /// BoringSSL-style padding to 512 bytes.
    Padding,
}

impl TlsExtension {
    /// Extension type code, `None` for GREASE.
    pub const fn id(&self) -> Option<u16> {
        use extensions::*;
        let id = match self {
            TlsExtension::Grease => return None,
            TlsExtension::ServerName => SERVER_NAME,
            TlsExtension::ExtendedMasterSecret => EXTENDED_MASTER_SECRET,
            TlsExtension::RenegotiationInfo(_) => RENEGOTIATION_INFO,
            TlsExtension::SupportedGroups(_) => SUPPORTED_GROUPS,
            TlsExtension::EcPointFormats(_) => EC_POINT_FORMATS,
            TlsExtension::SessionTicket => SESSION_TICKET,
            TlsExtension::Alpn(_) => ALPN,
            TlsExtension::StatusRequest => STATUS_REQUEST,
            TlsExtension::SignatureAlgorithms(_) => SIGNATURE_ALGORITHMS,
            TlsExtension::DelegatedCredentials(_) => DELEGATED_CREDENTIALS,
            TlsExtension::SignedCertificateTimestamp => SIGNED_CERTIFICATE_TIMESTAMP,
            TlsExtension::KeyShare(_) => KEY_SHARE,
            TlsExtension::PskKeyExchangeModes(_) => PSK_KEY_EXCHANGE_MODES,
            TlsExtension::SupportedVersions(_) => SUPPORTED_VERSIONS,
            TlsExtension::CompressCertificate(_) => COMPRESS_CERTIFICATE,
            TlsExtension::ApplicationSettings(_) => APPLICATION_SETTINGS,
            TlsExtension::RecordSizeLimit(_) => RECORD_SIZE_LIMIT,
            TlsExtension::GreaseEch { .. } => ENCRYPTED_CLIENT_HELLO,
            TlsExtension::Padding => PADDING,
        };
        Some(id)
    }

    pub const fn is_grease(&self) -> bool {
        matches!(self, TlsExtension::Grease)
    }
}

/// Complete ClientHello description for one browser release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TlsFingerprintSpec {
    /// Human-readable release name.
    pub name: &'static str,
    /// Minimum protocol version.
    pub min_version: u16,
    /// Maximum protocol version.
    pub max_version: u16,
    /// Cipher suites in wire order.
    pub cipher_suites: &'static [u16],
    /// Compression methods in wire order.
    pub compression_methods: &'static [u8],
    /// Extensions in canonical wire order.
    pub extensions: &'static [TlsExtension],
    /// The browser permutes extension order per connection (Chrome 110+).
    /// The handshake layer shuffles; this table keeps the canonical order.
    pub permute_extensions: bool,
}

impl TlsFingerprintSpec {
    /// Extension type codes in order, GREASE omitted.
    pub fn extension_ids(&self) -> Vec<u16> {
        self.extensions.iter().filter_map(TlsExtension::id).collect()
    }

    /// Cipher suites with GREASE placeholders removed.
    pub fn cipher_ids(&self) -> Vec<u16> {
        self.cipher_suites
            .iter()
            .copied()
            .filter(|&c| c != GREASE_PLACEHOLDER)
            .collect()
    }

    /// ALPN protocol list, if the hello carries one.
    pub fn alpn_protocols(&self) -> Option<&'static [&'static str]> {
        self.extensions.iter().find_map(|ext| match ext {
            TlsExtension::Alpn(protos) => Some(*protos),
            _ => None,
        })
    }

    /// Supported groups, GREASE removed.
    pub fn supported_groups(&self) -> Vec<u16> {
        self.extensions
            .iter()
            .find_map(|ext| match ext {
                TlsExtension::SupportedGroups(groups) => Some(*groups),
                _ => None,
            })
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(|&g| g != GREASE_PLACEHOLDER)
            .collect()
    }

    /// Look up an extension by type code.
    pub fn extension(&self, id: u16) -> Option<&TlsExtension> {
        self.extensions.iter().find(|ext| ext.id() == Some(id))
    }

    /// Whether the hello carries GREASE anywhere.
    pub fn uses_grease(&self) -> bool {
        self.cipher_suites.contains(&GREASE_PLACEHOLDER)
            || self.extensions.iter().any(TlsExtension::is_grease)
    }
}
