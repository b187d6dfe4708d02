#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stepcards::config::parse_records;
use stepcards::content::{normalize_entries, normalize_topics};
use stepcards::render::{cards, stepper};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Any data file must either fail cleanly or render without panicking.
        for key in ["trajectory", "research"] {
            if let Ok(records) = parse_records(text, key, Path::new("fuzz.yml")) {
                let _ = stepper::render_stepper(&normalize_entries(&records), "stepper");
                let _ = cards::render_cards(&normalize_topics(&records), "research");
            }
        }
    }
});
