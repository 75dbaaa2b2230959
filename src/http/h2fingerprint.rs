//! HTTP/2 Fingerprint Emulation Types
//!
//! Passive HTTP/2 fingerprinting looks at:
//! - SETTINGS frame parameters and their order
//! - WINDOW_UPDATE increment on the connection stream
//! - PRIORITY frames sent right after the preface
//! - Stream dependency/weight carried on the first HEADERS frame
//!
//! Pseudo-header order is the fourth component; it comes from the header
//! templates in [`crate::http::headerorder`].
//!
//! An [`Http2Profile`] is a fixed table per browser release. The connection
//! layer receives it through [`Http2Connection`] before the first request;
//! the trait takes the place of an HTTP/2 client builder, so the frame types
//! here are plain data rather than a transport crate's settings types.

use crate::emulation::Browser;
use serde::Serialize;

/// SETTINGS parameter identifiers (RFC 9113 §6.5.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum SettingId {
    HeaderTableSize = 0x1,
    EnablePush = 0x2,
    MaxConcurrentStreams = 0x3,
    InitialWindowSize = 0x4,
    MaxFrameSize = 0x5,
    MaxHeaderListSize = 0x6,
}

impl SettingId {
    /// Wire identifier.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// One SETTINGS parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub id: SettingId,
    pub value: u32,
}

impl Setting {
    pub const fn new(id: SettingId, value: u32) -> Self {
        Self { id, value }
    }
}

/// Stream dependency, exclusivity and weight.
///
/// `weight` is the wire value (0-255); the effective weight is `weight + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityParam {
    pub stream_dependency: u32,
    pub exclusive: bool,
    pub weight: u8,
}

impl PriorityParam {
    pub const fn new(stream_dependency: u32, exclusive: bool, weight: u8) -> Self {
        Self {
            stream_dependency,
            exclusive,
            weight,
        }
    }
}

/// A PRIORITY frame sent proactively on an idle stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityFrame {
    pub stream_id: u32,
    pub priority: PriorityParam,
}

impl PriorityFrame {
    pub const fn new(stream_id: u32, priority: PriorityParam) -> Self {
        Self {
            stream_id,
            priority,
        }
    }
}

/// Connection setup seam implemented by the HTTP/2 transport.
///
/// [`Http2Profile::apply`] calls these in the exact order the browser emits
/// them on the wire.
pub trait Http2Connection {
    /// Append a parameter to the initial SETTINGS frame.
    fn push_setting(&mut self, setting: Setting);

    /// Connection-level flow-control window (sent as WINDOW_UPDATE on stream 0).
    fn set_connection_window(&mut self, size: u32);

    /// Priority carried by HEADERS frames of new requests.
    fn set_headers_priority(&mut self, priority: PriorityParam);

    /// Queue a PRIORITY frame to follow the preface.
    fn push_priority_frame(&mut self, frame: PriorityFrame);
}

/// Per-browser HTTP/2 connection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Http2Profile {
    /// SETTINGS parameters in the order they are sent.
    pub settings: &'static [Setting],
    /// Connection-level flow-control window.
    pub connection_window: u32,
    /// Priority on the first HEADERS frame.
    pub priority: PriorityParam,
    /// PRIORITY frames sent after the preface, in order.
    pub priority_frames: &'static [PriorityFrame],
}

impl Http2Profile {
    /// Profile for a browser.
    pub fn for_browser(browser: Browser) -> &'static Http2Profile {
        match browser {
            Browser::Chrome => &CHROME,
            Browser::Firefox => &FIREFOX,
        }
    }

    /// Configure a connection. Call once, before the first request.
    pub fn apply<C: Http2Connection + ?Sized>(&self, conn: &mut C) {
        for setting in self.settings {
            conn.push_setting(*setting);
        }
        conn.set_connection_window(self.connection_window);
        conn.set_headers_priority(self.priority);
        for frame in self.priority_frames {
            conn.push_priority_frame(*frame);
        }

        tracing::debug!(
            settings = self.settings.len(),
            priority_frames = self.priority_frames.len(),
            window = self.connection_window,
            "applied HTTP/2 profile"
        );
    }

    /// Value of a SETTINGS parameter, if the browser sends it.
    pub fn setting(&self, id: SettingId) -> Option<u32> {
        self.settings.iter().find(|s| s.id == id).map(|s| s.value)
    }

    pub fn header_table_size(&self) -> Option<u32> {
        self.setting(SettingId::HeaderTableSize)
    }

    /// `Some(false)` when SETTINGS_ENABLE_PUSH=0 is sent explicitly.
    pub fn enable_push(&self) -> Option<bool> {
        self.setting(SettingId::EnablePush).map(|v| v != 0)
    }

    pub fn initial_window_size(&self) -> Option<u32> {
        self.setting(SettingId::InitialWindowSize)
    }

    pub fn max_frame_size(&self) -> Option<u32> {
        self.setting(SettingId::MaxFrameSize)
    }

    pub fn max_header_list_size(&self) -> Option<u32> {
        self.setting(SettingId::MaxHeaderListSize)
    }
}

// --- Browser-specific configurations ---

// Akamai: 1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p
static CHROME: Http2Profile = Http2Profile {
    settings: &[
        Setting::new(SettingId::HeaderTableSize, 65536),
        Setting::new(SettingId::EnablePush, 0),
        Setting::new(SettingId::InitialWindowSize, 6291456),
        Setting::new(SettingId::MaxHeaderListSize, 262144),
    ],
    connection_window: 15663105,
    priority: PriorityParam::new(0, true, 255),
    priority_frames: &[],
};

// Akamai: 1:65536;4:131072;5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s
static FIREFOX: Http2Profile = Http2Profile {
    settings: &[
        Setting::new(SettingId::HeaderTableSize, 65536),
        Setting::new(SettingId::InitialWindowSize, 131072),
        Setting::new(SettingId::MaxFrameSize, 16384),
    ],
    connection_window: 12517377,
    priority: PriorityParam::new(13, false, 41),
    priority_frames: &[
        PriorityFrame::new(3, PriorityParam::new(0, false, 200)),
        PriorityFrame::new(5, PriorityParam::new(0, false, 100)),
        PriorityFrame::new(7, PriorityParam::new(0, false, 0)),
        PriorityFrame::new(9, PriorityParam::new(7, false, 0)),
        PriorityFrame::new(11, PriorityParam::new(3, false, 0)),
        PriorityFrame::new(13, PriorityParam::new(0, false, 240)),
    ],
};
