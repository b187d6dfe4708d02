#![no_main]

use libfuzzer_sys::fuzz_target;
use stepcards::config::Settings;
use stepcards::{RenderSession, expand_document};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut session = RenderSession::new(Settings::with_content_dir("/nonexistent"));
        let _ = expand_document(&mut session, text);
    }
});
