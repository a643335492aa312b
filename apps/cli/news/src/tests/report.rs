// Unit tests for page reports

use crate::report::PageReport;

use client_core::handlers::{RenderOutcome, SubmitOutcome};
use client_core::page::{Browser, MemoryPage};
use client_core::render::ListItem;

fn item() -> ListItem {
    ListItem {
        title: String::from("<A>"),
        content: String::from("B"),
        published_on: String::from("1/15/2024"),
    }
}

/// **VALUE**: Verifies a submit report carries location, notices and success.
///
/// **BUG THIS CATCHES**: Would catch a rejected submit reported as success.
#[test]
fn given_rejected_submit_when_reporting_then_notice_shown_and_not_succeeded() {
    let mut page = MemoryPage::new();
    page.alert("Login failed. Please check your credentials.");

    let report = PageReport::from_submit(
        &SubmitOutcome::Rejected("Login failed. Please check your credentials."),
        &page,
    );

    assert!(!report.succeeded);
    assert_eq!(report.location, None);
    assert_eq!(
        report.to_text(false),
        "Notice: Login failed. Please check your credentials."
    );
}

/// **VALUE**: Verifies render reports pull the news list and print escaped HTML.
///
/// **BUG THIS CATCHES**: Would catch `--html` printing raw article text.
#[test]
fn given_rendered_list_when_reporting_as_html_then_markup_is_escaped() {
    let page = MemoryPage::new().with_list("news-list", vec![item()]);

    let report = PageReport::from_render(&RenderOutcome::Rendered(1), &page);

    assert!(report.succeeded);
    assert_eq!(report.items, vec![item()]);
    let html = report.to_text(true);
    assert!(html.contains("<h3>&lt;A&gt;</h3>"));
    assert!(html.starts_with("<ul id=\"news-list\">"));
}

/// **VALUE**: Verifies JSON reports expose items with their fields.
///
/// **BUG THIS CATCHES**: Would catch items missing from `--json` output.
#[test]
fn given_items_report_when_serialized_then_items_are_included() {
    let report = PageReport::from_items(vec![item()]);

    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"succeeded\":true"));
    assert!(json.contains("\"published_on\":\"1/15/2024\""));
}
