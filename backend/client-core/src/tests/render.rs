// Unit tests for render module
// Escaping, list-item layout and locale date formatting

use crate::render::{DateFormatter, DateLocale, INVALID_DATE, ListItem, escape_html, render_list_html};

use models::{Article, PublishedDate};

/// **VALUE**: Verifies every markup-significant character is escaped.
///
/// **WHY THIS MATTERS**: Article text comes from the server and is shown on the page.
/// Inserting it as markup is a cross-site-scripting hole.
///
/// **BUG THIS CATCHES**: Would catch a missing case in the escape table.
#[test]
fn given_markup_characters_when_escaped_then_all_become_entities() {
    assert_eq!(
        escape_html(r#"<script>alert("x & 'y'")</script>"#),
        "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

/// **VALUE**: Verifies the list-item layout: heading, content, publish line.
///
/// **WHY THIS MATTERS**: Page stylesheets target `li > h3` and `li > p`.
///
/// **BUG THIS CATCHES**: Would catch reordered or dropped elements.
#[test]
fn given_article_when_rendered_then_layout_is_heading_content_date() {
    // GIVEN: The canonical example article, viewed from UTC in en-US
    let article = Article::new("A", "B", "2024-01-15T00:00:00Z");
    let formatter = DateFormatter::fixed(DateLocale::EnUs, 0);

    // WHEN: Rendering
    let item = ListItem::from_article(&article, &formatter);

    // THEN: Fields and markup match
    assert_eq!(item.title, "A");
    assert_eq!(item.content, "B");
    assert_eq!(item.published_on, "1/15/2024");
    assert_eq!(
        item.to_html(),
        "<li><h3>A</h3><p>B</p><p>Published on: 1/15/2024</p></li>"
    );
}

/// **VALUE**: Verifies hostile article text is rendered inert.
///
/// **WHY THIS MATTERS**: This is the text-safe insertion that replaces raw markup.
///
/// **BUG THIS CATCHES**: Would catch `to_html` interpolating unescaped fields.
#[test]
fn given_article_with_markup_when_rendered_then_markup_is_text() {
    let article = Article::new("<b>Bold</b>", "<img src=x onerror=alert(1)>", "2024-01-15");
    let item = ListItem::from_article(&article, &DateFormatter::fixed(DateLocale::Iso, 0));

    let html = item.to_html();

    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(!html.contains("<img"));
    assert!(html.contains("Published on: 2024-01-15"));
}

/// **VALUE**: Verifies locale patterns for the same day.
///
/// **WHY THIS MATTERS**: Viewers read dates in their own convention.
///
/// **BUG THIS CATCHES**: Would catch swapped day/month patterns.
#[test]
fn given_each_locale_when_formatting_then_pattern_matches_convention() {
    let published = PublishedDate::parse("2024-01-05T12:00:00Z");

    let format = |locale| DateFormatter::fixed(locale, 0).format(published);

    assert_eq!(format(DateLocale::EnUs), "1/5/2024");
    assert_eq!(format(DateLocale::EnGb), "05/01/2024");
    assert_eq!(format(DateLocale::Fr), "05/01/2024");
    assert_eq!(format(DateLocale::De), "5.1.2024");
    assert_eq!(format(DateLocale::Iso), "2024-01-05");
}

/// **VALUE**: Verifies zoned instants shift to the viewer's zone and zoneless times do not.
///
/// **WHY THIS MATTERS**: Midnight UTC is still the previous evening west of Greenwich.
///
/// **BUG THIS CATCHES**: Would catch formatting the server's date without conversion.
#[test]
fn given_viewer_offset_when_formatting_then_instant_shifts_but_local_does_not() {
    let west = DateFormatter::fixed(DateLocale::Iso, -5 * 60);

    assert_eq!(
        west.format(PublishedDate::parse("2024-01-15T00:00:00Z")),
        "2024-01-14"
    );
    assert_eq!(
        west.format(PublishedDate::parse("2024-01-15T00:00:00")),
        "2024-01-15"
    );
}

/// **VALUE**: Verifies unreadable dates render as "Invalid Date".
///
/// **WHY THIS MATTERS**: One bad record must not break the whole list.
///
/// **BUG THIS CATCHES**: Would catch panics or empty strings on bad dates.
#[test]
fn given_unparseable_date_when_formatting_then_shows_invalid_date() {
    let article = Article::new("t", "c", "not a date");

    let item = ListItem::from_article(&article, &DateFormatter::default());

    assert_eq!(item.published_on, INVALID_DATE);
}

/// **VALUE**: Verifies the list wrapper keeps item order and escapes the id.
///
/// **WHY THIS MATTERS**: Server order is the display order.
///
/// **BUG THIS CATCHES**: Would catch sorting or reversing items.
#[test]
fn given_items_when_rendering_list_then_order_is_preserved() {
    let formatter = DateFormatter::fixed(DateLocale::Iso, 0);
    let items: Vec<ListItem> = ["first", "second"]
        .iter()
        .map(|title| ListItem::from_article(&Article::new(*title, "", "2024-01-01"), &formatter))
        .collect();

    let html = render_list_html("news-list", &items);

    assert!(html.starts_with("<ul id=\"news-list\">"));
    assert!(html.ends_with("</ul>"));
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
}
