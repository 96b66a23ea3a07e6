#![no_main]
use domwalk::dom::Dom;
use domwalk::tree::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The reader must reject bad input with an error, never a panic,
        // and whatever it accepts must serialize.
        if let Ok(doc) = Document::parse(s) {
            let _ = doc.inner_html(doc.content_root());
        }
    }
});
