//! Structural queries against the in-memory tree backend.
//!
//! Documents here are built either through the reader or node by node with
//! the builder API, so every expectation can be checked by hand against the
//! exact tree shape.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use domwalk::matcher::{count_matching_ancestor_tags, deepest_match, depth, has_ancestor_with_attribute};
use domwalk::tree::ReadOptions;
use domwalk::{Document, Error, Locate, Matcher, MatcherConfig, Parsed};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Builds `<nav data-scope="top"><ul><li><a href="/x">x</a></li></ul></nav>`
/// without going through the reader.
fn built_nav() -> Document {
    let mut doc = Document::new();
    let nav = doc.create_element("nav");
    doc.set_attribute(nav, "data-scope", "top");
    let ul = doc.create_element("UL");
    let li = doc.create_element("li");
    let a = doc.create_element("a");
    doc.set_attribute(a, "href", "/x");
    let text = doc.create_text("x");

    doc.append_child(doc.body(), nav);
    doc.append_child(nav, ul);
    doc.append_child(ul, li);
    doc.append_child(li, a);
    doc.append_child(a, text);
    doc
}

// ---------------------------------------------------------------------------
// Built documents
// ---------------------------------------------------------------------------

#[test]
fn test_built_document_serializes_like_parsed_one() {
    let built = Parsed::from_document(built_nav());
    let parsed = Parsed::<Document>::parse(
        r#"<nav data-scope="top"><ul><li><a href="/x">x</a></li></ul></nav>"#,
    )
    .unwrap();
    assert_eq!(
        built.top_level().html().unwrap(),
        parsed.top_level().html().unwrap()
    );
}

#[test]
fn test_queries_on_built_document() {
    let parsed = Parsed::from_document(built_nav());
    let nav = parsed.top_level();
    let a = nav.find("a").unwrap();

    assert_eq!(depth(&nav, &a).unwrap(), 3);
    assert_eq!(count_matching_ancestor_tags(&nav, &a, &["ul", "LI"]).unwrap(), 2);
    assert!(has_ancestor_with_attribute(&a, &parsed.content_root(), &["data-scope"]).unwrap());
    assert!(!has_ancestor_with_attribute(&a, &nav, &["data-scope"]).unwrap());
    assert_eq!(a.attr("href").unwrap(), "/x");
}

// ---------------------------------------------------------------------------
// Properties shared with the html backend
// ---------------------------------------------------------------------------

#[test]
fn test_nested_span_depth_and_counts() {
    let parsed = Parsed::<Document>::parse("<div><p><span>x</span></p></div>").unwrap();
    let div = parsed.top_level();
    let span = div.find("span").unwrap();

    assert_eq!(depth(&div, &span).unwrap(), 2);
    assert_eq!(count_matching_ancestor_tags(&div, &span, &["p"]).unwrap(), 1);
    assert_eq!(count_matching_ancestor_tags(&div, &span, &["div", "p"]).unwrap(), 2);
    assert_eq!(
        Matcher::default()
            .count_matching_ancestor_tags_within(&div, &span, &["div", "p"])
            .unwrap(),
        1
    );
    assert!(matches!(depth(&div, &div), Err(Error::InvalidInput(_))));
}

#[test]
fn test_deepest_match_and_rename() {
    let parsed = Parsed::<Document>::parse(r#"<div id="a"><b>1</b><i><b>2</b></i></div>"#).unwrap();
    let div = parsed.top_level();

    let deepest = deepest_match(&div, &["b", "i"]).into_option().unwrap();
    assert_eq!(deepest.html().unwrap(), "<b>2</b>");

    let renamed = div.rename_tag("section").unwrap();
    assert_eq!(
        renamed.top_level().html().unwrap(),
        r#"<section id="a"><b>1</b><i><b>2</b></i></section>"#
    );
}

#[test]
fn test_markup_and_identity_disagree_on_twins() {
    let parsed = Parsed::<Document>::parse(
        "<main><section><b>k</b></section><div><section><b>k</b></section></div></main>",
    )
    .unwrap();
    let main = parsed.top_level();
    let second = main.find("b").unwrap().get(1);

    let markup = Matcher::new(MatcherConfig::default().locate(Locate::Markup));
    let identity = Matcher::new(MatcherConfig::default().locate(Locate::Identity));
    assert_eq!(markup.depth(&main, &second).unwrap(), 2);
    assert_eq!(identity.depth(&main, &second).unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Reader limits and failures
// ---------------------------------------------------------------------------

#[test]
fn test_reader_depth_limit() {
    let open: String = (0..20).map(|_| "<i>").collect();
    let shallow = ReadOptions::default().max_depth(10);
    let err = Document::parse_with_options(&open, &shallow).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));

    let doc = Document::parse_with_options(&open, &ReadOptions::default()).unwrap();
    let parsed = Parsed::from_document(doc);
    let top = parsed.top_level();
    let deepest = top.find("i").unwrap();
    let last = deepest.get(deepest.len() - 1);
    assert_eq!(depth(&top, &last).unwrap(), 19);
}

#[test]
fn test_unterminated_markup_is_a_parse_error() {
    for markup in ["<div", "<!-- open", r#"<a href="x>t</a>"#] {
        assert!(
            matches!(Parsed::<Document>::parse(markup), Err(Error::Parse { .. })),
            "{markup}"
        );
    }
}

#[test]
fn test_rich_selectors_are_rejected() {
    let parsed = Parsed::<Document>::parse("<div><b>x</b></div>").unwrap();
    let err = parsed.top_level().find("div > b").unwrap_err();
    assert!(matches!(err, Error::Selector { .. }));
    assert_eq!(parsed.top_level().find("b, i").unwrap().len(), 1);
}
