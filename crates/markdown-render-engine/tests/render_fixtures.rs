use markdown_render_engine::{PageTemplate, render, title_from_markdown};
use pretty_assertions::assert_eq;

#[test]
fn fixture_kitchen_sink() {
    assert_fixture("kitchen_sink");
}

#[test]
fn fixture_degraded_constructs() {
    assert_fixture("degraded_constructs");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(render(&md), expected);
}

/// Every non-blank source line outside code must surface somewhere in the output.
#[test]
fn no_text_is_dropped() {
    let md = "alpha\n\n# beta\n\n- gamma\n1. delta\n\n| epsilon |\n\nzeta";
    let html = render(md);
    for word in ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"] {
        assert!(html.contains(word), "{word} missing from {html}");
    }
}

#[test]
fn blocks_appear_in_source_order() {
    let html = render("# one\n\ntwo\n\n- three\n\n```\nfour\n```\n\n| five |");
    let positions: Vec<_> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|w| html.find(w).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn independent_calls_share_no_state() {
    // An open fence in one call must not leak into the next.
    let _ = render("```\nunterminated");
    assert_eq!(render("*x*"), "<p><em>x</em></p>\n");
}

#[test]
fn full_page_assembly() {
    let md = "# Hello\n\nWorld";
    let title = title_from_markdown(md).unwrap();
    let page = PageTemplate::new(title).wrap(&render(md));
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Hello</title>"));
    assert!(page.contains("<h1>Hello</h1>\n<p>World</p>\n</article>"));
}
