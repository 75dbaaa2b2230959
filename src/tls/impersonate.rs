use super::options::{
    cert_compression, cipher_suites::*, groups, hpke, signature_algorithms::*, versions,
    HpkeSymmetricCipherSuite, Renegotiation, TlsExtension, TlsFingerprintSpec,
    COMPRESSION_NULL, GREASE_PLACEHOLDER, POINT_FORMAT_UNCOMPRESSED, PSK_MODE_DHE,
};
use crate::base::error::ImpersonateError;
use crate::emulation::{Browser, BrowserVersion};

/// Look up the ClientHello table entry for a browser release.
pub fn spec(
    browser: Browser,
    version: BrowserVersion,
) -> Result<&'static TlsFingerprintSpec, ImpersonateError> {
    let found = match (browser, version.major, version.private) {
        (Browser::Chrome, 131, false) => Some(&CHROME_131),
        (Browser::Firefox, 131, false) => Some(&FIREFOX_131),
        (Browser::Firefox, 131, true) => Some(&FIREFOX_PRIVATE_131),
        _ => None,
    };

    found.ok_or_else(|| {
        tracing::debug!(browser = %browser, version = %version, "no TLS table entry");
        ImpersonateError::UnsupportedIdentity { browser, version }
    })
}

const SUPPORTED: &[(Browser, BrowserVersion)] = &[
    (Browser::Chrome, BrowserVersion::new(131)),
    (Browser::Firefox, BrowserVersion::new(131)),
    (Browser::Firefox, BrowserVersion::private(131)),
];

/// Every (browser, version) pair with a table entry.
pub fn supported() -> &'static [(Browser, BrowserVersion)] {
    SUPPORTED
}

// --- Shared parameter lists ---

const ALPN_H2_HTTP1: &[&str] = &["h2", "http/1.1"];

const CHROME_SIGALGS: &[u16] = &[
    ECDSA_SECP256R1_SHA256,
    RSA_PSS_RSAE_SHA256,
    RSA_PKCS1_SHA256,
    ECDSA_SECP384R1_SHA384,
    RSA_PSS_RSAE_SHA384,
    RSA_PKCS1_SHA384,
    RSA_PSS_RSAE_SHA512,
    RSA_PKCS1_SHA512,
];

const FIREFOX_SIGALGS: &[u16] = &[
    ECDSA_SECP256R1_SHA256,
    ECDSA_SECP384R1_SHA384,
    ECDSA_SECP521R1_SHA512,
    RSA_PSS_RSAE_SHA256,
    RSA_PSS_RSAE_SHA384,
    RSA_PSS_RSAE_SHA512,
    RSA_PKCS1_SHA256,
    RSA_PKCS1_SHA384,
    RSA_PKCS1_SHA512,
    ECDSA_SHA1,
    RSA_PKCS1_SHA1,
];

const FIREFOX_DELEGATED_CREDENTIALS: &[u16] = &[
    ECDSA_SECP256R1_SHA256,
    ECDSA_SECP384R1_SHA384,
    ECDSA_SECP521R1_SHA512,
    ECDSA_SHA1,
];

const FIREFOX_GROUPS: &[u16] = &[
    groups::X25519,
    groups::SECP256R1,
    groups::SECP384R1,
    groups::SECP521R1,
    groups::FFDHE2048,
    groups::FFDHE3072,
];

const FIREFOX_CIPHERS: &[u16] = &[
    TLS_AES_128_GCM_SHA256,
    TLS_CHACHA20_POLY1305_SHA256,
    TLS_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
    TLS_RSA_WITH_AES_128_GCM_SHA256,
    TLS_RSA_WITH_AES_256_GCM_SHA384,
    TLS_RSA_WITH_AES_128_CBC_SHA,
    TLS_RSA_WITH_AES_256_CBC_SHA,
];

const FIREFOX_ECH_SUITES: &[HpkeSymmetricCipherSuite] = &[
    HpkeSymmetricCipherSuite {
        kdf_id: hpke::KDF_HKDF_SHA256,
        aead_id: hpke::AEAD_AES_128_GCM,
    },
    HpkeSymmetricCipherSuite {
        kdf_id: hpke::KDF_HKDF_SHA256,
        aead_id: hpke::AEAD_CHACHA20_POLY1305,
    },
];

// --- Chrome ---

// JA4 t13d1516h2_8daaf6152771_923f26044972; JA3 varies (extension permutation).
pub static CHROME_131: TlsFingerprintSpec = TlsFingerprintSpec {
    name: "Chrome 131",
    min_version: versions::TLS_1_2,
    max_version: versions::TLS_1_3,
    cipher_suites: &[
        GREASE_PLACEHOLDER,
        TLS_AES_128_GCM_SHA256,
        TLS_AES_256_GCM_SHA384,
        TLS_CHACHA20_POLY1305_SHA256,
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
        TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
        TLS_RSA_WITH_AES_128_GCM_SHA256,
        TLS_RSA_WITH_AES_256_GCM_SHA384,
        TLS_RSA_WITH_AES_128_CBC_SHA,
        TLS_RSA_WITH_AES_256_CBC_SHA,
    ],
    compression_methods: &[COMPRESSION_NULL],
    extensions: &[
        TlsExtension::Grease,
        TlsExtension::ServerName,
        TlsExtension::ExtendedMasterSecret,
        TlsExtension::RenegotiationInfo(Renegotiation::OnceAsClient),
        TlsExtension::SupportedGroups(&[
            GREASE_PLACEHOLDER,
            groups::X25519_MLKEM768,
            groups::X25519,
            groups::SECP256R1,
            groups::SECP384R1,
        ]),
        TlsExtension::EcPointFormats(&[POINT_FORMAT_UNCOMPRESSED]),
        TlsExtension::SessionTicket,
        TlsExtension::Alpn(ALPN_H2_HTTP1),
        TlsExtension::StatusRequest,
        TlsExtension::SignatureAlgorithms(CHROME_SIGALGS),
        TlsExtension::SignedCertificateTimestamp,
        TlsExtension::KeyShare(&[GREASE_PLACEHOLDER, groups::X25519_MLKEM768, groups::X25519]),
        TlsExtension::PskKeyExchangeModes(&[PSK_MODE_DHE]),
        TlsExtension::SupportedVersions(&[
            GREASE_PLACEHOLDER,
            versions::TLS_1_3,
            versions::TLS_1_2,
        ]),
        TlsExtension::CompressCertificate(&[cert_compression::BROTLI]),
        TlsExtension::ApplicationSettings(&["h2"]),
        TlsExtension::GreaseEch {
            cipher_suites: &[HpkeSymmetricCipherSuite {
                kdf_id: hpke::KDF_HKDF_SHA256,
                aead_id: hpke::AEAD_AES_128_GCM,
            }],
            payload_lengths: &[128, 160, 192, 224],
        },
        TlsExtension::Grease,
    ],
    permute_extensions: true,
};

// --- Firefox ---

// JA3 b5001237acdf006056b409cc433726b0, JA4 t13d1715h2_5b57614c22b0_93c746dc12af.
pub static FIREFOX_131: TlsFingerprintSpec = TlsFingerprintSpec {
    name: "Firefox 131",
    min_version: versions::TLS_1_2,
    max_version: versions::TLS_1_3,
    cipher_suites: FIREFOX_CIPHERS,
    compression_methods: &[COMPRESSION_NULL],
    extensions: &[
        TlsExtension::ServerName,
        TlsExtension::ExtendedMasterSecret,
        TlsExtension::RenegotiationInfo(Renegotiation::OnceAsClient),
        TlsExtension::SupportedGroups(FIREFOX_GROUPS),
        TlsExtension::EcPointFormats(&[POINT_FORMAT_UNCOMPRESSED]),
        TlsExtension::SessionTicket,
        TlsExtension::Alpn(ALPN_H2_HTTP1),
        TlsExtension::StatusRequest,
        TlsExtension::DelegatedCredentials(FIREFOX_DELEGATED_CREDENTIALS),
        TlsExtension::KeyShare(&[groups::X25519, groups::SECP256R1]),
        TlsExtension::SupportedVersions(&[versions::TLS_1_3, versions::TLS_1_2]),
        TlsExtension::SignatureAlgorithms(FIREFOX_SIGALGS),
        TlsExtension::PskKeyExchangeModes(&[PSK_MODE_DHE]),
        TlsExtension::RecordSizeLimit(0x4001),
        TlsExtension::GreaseEch {
            cipher_suites: FIREFOX_ECH_SUITES,
            payload_lengths: &[223],
        },
    ],
    permute_extensions: false,
};

// Private windows drop session resumption: no session_ticket, no psk_key_exchange_modes.
pub static FIREFOX_PRIVATE_131: TlsFingerprintSpec = TlsFingerprintSpec {
    name: "Firefox 131 (private)",
    min_version: versions::TLS_1_2,
    max_version: versions::TLS_1_3,
    cipher_suites: FIREFOX_CIPHERS,
    compression_methods: &[COMPRESSION_NULL],
    extensions: &[
        TlsExtension::ServerName,
        TlsExtension::ExtendedMasterSecret,
        TlsExtension::RenegotiationInfo(Renegotiation::OnceAsClient),
        TlsExtension::SupportedGroups(FIREFOX_GROUPS),
        TlsExtension::EcPointFormats(&[POINT_FORMAT_UNCOMPRESSED]),
        TlsExtension::Alpn(ALPN_H2_HTTP1),
        TlsExtension::StatusRequest,
        TlsExtension::DelegatedCredentials(FIREFOX_DELEGATED_CREDENTIALS),
        TlsExtension::KeyShare(&[groups::X25519, groups::SECP256R1]),
        TlsExtension::SupportedVersions(&[versions::TLS_1_3, versions::TLS_1_2]),
        TlsExtension::SignatureAlgorithms(FIREFOX_SIGALGS),
        TlsExtension::RecordSizeLimit(0x4001),
        TlsExtension::GreaseEch {
            cipher_suites: FIREFOX_ECH_SUITES,
            payload_lengths: &[223],
        },
    ],
    permute_extensions: false,
};
