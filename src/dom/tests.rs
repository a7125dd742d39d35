//! Tests for the page model.

use super::*;

#[test]
fn test_apply_skips_missing_target() {
    let mut doc = Document::new().with_target(Target::SiteTagline);

    let applied = doc.apply(vec![
        Mutation::text(Target::SiteTagline, "hello"),
        Mutation::text(Target::FooterSlogan, "ignored"),
    ]);

    assert_eq!(applied, 1);
    assert_eq!(doc.text_of(Target::SiteTagline).as_deref(), Some("hello"));
    assert!(doc.element(Target::FooterSlogan).is_none());
}

#[test]
fn test_document_level_mutations_always_apply() {
    let mut doc = Document::new();
    let applied = doc.apply(vec![
        Mutation::style_var("--primary", "#f00"),
        Mutation::SetDocumentTitle {
            title: "Fun".into(),
        },
    ]);
    assert_eq!(applied, 2);
    assert_eq!(doc.style_var("--primary"), Some("#f00"));
    assert_eq!(doc.title(), "Fun");
}

#[test]
fn test_replace_children_discards_previous() {
    let mut doc = Document::new().with_target(Target::GamesContainer);
    doc.apply(vec![Mutation::ReplaceChildren {
        target: Target::GamesContainer,
        children: vec![Element::new("div"), Element::new("div")],
    }]);
    doc.apply(vec![Mutation::ReplaceChildren {
        target: Target::GamesContainer,
        children: vec![Element::new("p")],
    }]);

    let container = doc.element(Target::GamesContainer).unwrap();
    let tags: Vec<_> = container.child_elements().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["p"]);
}

#[test]
fn test_set_attribute_replaces_in_place() {
    let mut el = Element::new("a").attr("href", "#").attr("class", "x");
    el.set_attribute("href", "/play");
    assert_eq!(el.attribute("href"), Some("/play"));
    assert_eq!(el.attributes.len(), 2);
}

#[test]
fn test_landing_page_has_every_target() {
    let doc = Document::landing_page();
    for t in Target::ALL {
        assert!(doc.has(t), "missing {}", t);
    }
    assert_eq!(doc.text_of(Target::CountdownDays).as_deref(), Some("00"));
    assert_eq!(doc.element(Target::Favicon).unwrap().attribute("rel"), Some("icon"));
    assert!(doc.has_id("games"));
    assert!(doc.has_id("site-logo"));
    assert!(!doc.has_id("nowhere"));
}

#[test]
fn test_find_class_is_depth_first() {
    let el = Element::new("div").child(
        Element::new("div")
            .class("game-content")
            .child(Element::new("h4").class("game-title").text("Shapes")),
    );
    assert_eq!(el.find_class("game-title").unwrap().text_content(), "Shapes");
    assert!(el.find_class("missing").is_none());
}

#[test]
fn test_to_html_escapes_text_and_attributes() {
    let el = Element::new("a")
        .attr("href", "/x?a=1&b=\"2\"")
        .text("<b>Tom & Jerry</b>");
    assert_eq!(
        el.to_html(),
        "<a href=\"/x?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"
    );
}

#[test]
fn test_to_html_void_element() {
    let el = Element::new("img").attr("src", "a.png");
    assert_eq!(el.to_html(), "<img src=\"a.png\">");
}

#[test]
fn test_document_html_escapes_content() {
    let mut doc = Document::new()
        .with_title("Kids & Games")
        .with_target(Target::SiteTagline);
    doc.apply(vec![
        Mutation::style_var("--font-family", "\"Comic Sans\""),
        Mutation::text(Target::SiteTagline, "<script>x</script>"),
    ]);

    let html = doc.to_html();

    assert!(html.starts_with("<!DOCTYPE html>\n<title>Kids &amp; Games</title>"));
    assert!(html.contains("<html style=\"--font-family: &quot;Comic Sans&quot;\">"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_mutation_target() {
    assert_eq!(
        Mutation::text(Target::SiteTitle, "x").target(),
        Some(Target::SiteTitle)
    );
    assert_eq!(Mutation::style_var("--bg", "#fff").target(), None);
}

#[test]
fn test_mutation_serializes_with_op_tag() {
    let json = serde_json::to_value(Mutation::attr(Target::SiteLogo, "src", "logo.png")).unwrap();
    assert_eq!(json["op"], "set_attribute");
    assert_eq!(json["target"], "site_logo");
}
