//! HTTP/2 profile tests.
//!
//! The Akamai fingerprint text is rebuilt here from what a connection
//! receives and compared with the strings published for each browser.

use webmimic::emulation::{Browser, EmulationFactory};
use webmimic::http::{Http2Connection, Http2Profile, PriorityFrame, PriorityParam, Setting};

#[derive(Default)]
struct WireRecorder {
    settings: Vec<Setting>,
    window: Option<u32>,
    headers_priority: Option<PriorityParam>,
    frames: Vec<PriorityFrame>,
}

impl Http2Connection for WireRecorder {
    fn push_setting(&mut self, setting: Setting) {
        self.settings.push(setting);
    }

    fn set_connection_window(&mut self, size: u32) {
        self.window = Some(size);
    }

    fn set_headers_priority(&mut self, priority: PriorityParam) {
        self.headers_priority = Some(priority);
    }

    fn push_priority_frame(&mut self, frame: PriorityFrame) {
        self.frames.push(frame);
    }
}

impl WireRecorder {
    fn akamai(&self, pseudo_order: [&str; 4]) -> String {
        let settings = self
            .settings
            .iter()
            .map(|s| format!("{}:{}", s.id.code(), s.value))
            .collect::<Vec<_>>()
            .join(";");
        let frames = if self.frames.is_empty() {
            "0".to_string()
        } else {
            self.frames
                .iter()
                .map(|f| {
                    format!(
                        "{}:{}:{}:{}",
                        f.stream_id,
                        u8::from(f.priority.exclusive),
                        f.priority.stream_dependency,
                        u16::from(f.priority.weight) + 1
                    )
                })
                .collect::<Vec<_>>()
                .join(",")
        };
        let pseudo = pseudo_order
            .iter()
            .map(|p| &p[1..2])
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{settings}|{}|{frames}|{pseudo}",
            self.window.unwrap_or_default()
        )
    }
}

#[test]
fn test_chrome_akamai_text() {
    let emu = Browser::Chrome.emulation().unwrap();
    let mut conn = WireRecorder::default();
    emu.http2_profile().apply(&mut conn);
    assert_eq!(
        conn.akamai(emu.pseudo_order()),
        "1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p"
    );
    assert_eq!(conn.headers_priority, Some(PriorityParam::new(0, true, 255)));
}

#[test]
fn test_firefox_akamai_text() {
    let emu = Browser::Firefox.emulation().unwrap();
    let mut conn = WireRecorder::default();
    emu.http2_profile().apply(&mut conn);
    assert_eq!(
        conn.akamai(emu.pseudo_order()),
        "1:65536;4:131072;5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s"
    );
    assert_eq!(conn.headers_priority, Some(PriorityParam::new(13, false, 41)));
}

#[test]
fn test_apply_is_repeatable() {
    let profile = Http2Profile::for_browser(Browser::Firefox);
    let mut a = WireRecorder::default();
    let mut b = WireRecorder::default();
    profile.apply(&mut a);
    profile.apply(&mut b);
    assert_eq!(a.settings, b.settings);
    assert_eq!(a.frames, b.frames);
}

#[test]
fn test_apply_through_trait_object() {
    let mut conn = WireRecorder::default();
    let dyn_conn: &mut dyn Http2Connection = &mut conn;
    Http2Profile::for_browser(Browser::Chrome).apply(dyn_conn);
    assert_eq!(conn.settings.len(), 4);
    assert_eq!(conn.window, Some(15663105));
}

#[test]
fn test_profile_serializes() {
    let json = serde_json::to_value(Http2Profile::for_browser(Browser::Chrome)).unwrap();
    assert_eq!(json["connection_window"], 15663105);
    assert_eq!(json["settings"][0]["id"], "HeaderTableSize");
    assert_eq!(json["settings"][0]["value"], 65536);
    assert_eq!(json["priority"]["weight"], 255);
}
