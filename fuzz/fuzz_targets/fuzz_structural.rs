#![no_main]
use domwalk::matcher::{deepest_match, Locate, Matcher, MatcherConfig};
use domwalk::{HtmlDocument, Parsed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(parsed) = Parsed::<HtmlDocument>::parse(s) else {
        return;
    };
    let body = parsed.content_root();
    let Ok(all) = body.find("*") else {
        return;
    };

    // Structural queries over every element must terminate without panicking.
    let markup = Matcher::new(MatcherConfig::default().locate(Locate::Markup));
    for node in all.iter().take(64) {
        let _ = Matcher::default().depth(&body, &node);
        let _ = markup.depth(&body, &node);
        let _ = markup.count_matching_ancestor_tags(&body, &node, &["div", "p"]);
        let _ = node.climb_until(|a| Ok(a.is_empty()));
        let _ = node.rename_tag("x-renamed");
    }
    let _ = deepest_match(&body, &["*", "a", "div > p"]);
});
