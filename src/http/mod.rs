//! HTTP-layer fingerprint pieces: header order, HTTP/2 connection profile
//! and multipart boundaries.

pub mod boundary;
pub mod h2fingerprint;
pub mod headerorder;
pub mod multipart;
pub mod orderedheaders;

// Re-exports for convenience
pub use boundary::BoundaryGenerator;
pub use h2fingerprint::{Http2Connection, Http2Profile, PriorityFrame, PriorityParam, Setting, SettingId};
pub use orderedheaders::{arrange, OrderedHeaderMap};
