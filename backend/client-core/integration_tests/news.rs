use crate::helpers::{client_for, mock_server, unreachable_client};

use client_core::handlers::{NewsRenderer, RenderOutcome};
use client_core::page::MemoryPage;
use client_core::render::{DateFormatter, DateLocale, ListItem};

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn utc_formatter() -> DateFormatter {
    DateFormatter::fixed(DateLocale::EnUs, 0)
}

fn stale_item() -> ListItem {
    ListItem {
        title: String::from("Stale"),
        content: String::from("Server-rendered"),
        published_on: String::from("1/1/2020"),
    }
}

async fn articles_server(response: ResponseTemplate) -> wiremock::MockServer {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies the canonical single-article response renders one item.
///
/// **WHY THIS MATTERS**: This is the news page's whole job.
///
/// **BUG THIS CATCHES**: Would catch field mix-ups or a missing date conversion.
#[tokio::test]
async fn given_one_article_when_page_loads_then_list_has_one_item() {
    // GIVEN: A server returning one article, and a list with stale content
    let server = articles_server(ResponseTemplate::new(200).set_body_raw(
        r#"[{"title":"A","content":"B","publishedDate":"2024-01-15T00:00:00Z"}]"#,
        "application/json",
    ))
    .await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    // WHEN: Rendering
    let outcome = renderer.render(&mut page).await;

    // THEN: Stale content replaced by exactly one item
    assert_eq!(outcome, RenderOutcome::Rendered(1));
    let items = page.list_items("news-list").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "A");
    assert_eq!(items[0].content, "B");
    assert_eq!(items[0].published_on, "1/15/2024");
}

/// **VALUE**: Verifies an empty array clears the list.
///
/// **WHY THIS MATTERS**: Deleted articles must disappear from the page.
///
/// **BUG THIS CATCHES**: Would catch skipping the clear when there is nothing to append.
#[tokio::test]
async fn given_empty_array_when_page_loads_then_list_is_cleared() {
    let server = articles_server(ResponseTemplate::new(200).set_body_raw("[]", "application/json")).await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    let outcome = renderer.render(&mut page).await;

    assert_eq!(outcome, RenderOutcome::Rendered(0));
    assert!(page.list_items("news-list").unwrap().is_empty());
}

/// **VALUE**: Verifies server order is kept.
///
/// **WHY THIS MATTERS**: The server decides ordering; the client never sorts.
///
/// **BUG THIS CATCHES**: Would catch client-side sorting by date or title.
#[tokio::test]
async fn given_unsorted_articles_when_page_loads_then_server_order_is_kept() {
    let body = r#"[
        {"title":"Zeta","content":"z","publishedDate":"2024-01-01T00:00:00Z"},
        {"title":"Alpha","content":"a","publishedDate":"2024-06-01T00:00:00Z"}
    ]"#;
    let server = articles_server(ResponseTemplate::new(200).set_body_raw(body, "application/json")).await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![]);

    renderer.render(&mut page).await;

    let titles: Vec<&str> = page
        .list_items("news-list")
        .unwrap()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["Zeta", "Alpha"]);
}

/// **VALUE**: Verifies an article with a `null` date still renders, as `Invalid Date`.
///
/// **WHY THIS MATTERS**: The server writes `null` for unset fields; one sparse record
/// must not blank the whole list.
///
/// **BUG THIS CATCHES**: Would catch `null` failing deserialization of the entire array.
#[tokio::test]
async fn given_article_with_null_date_when_page_loads_then_item_shows_invalid_date() {
    let body = r#"[
        {"id":1,"title":"A","content":"B","source":null,"publishedAt":null},
        {"id":2,"title":null,"content":"D","publishedDate":"2024-01-15T00:00:00Z"}
    ]"#;
    let server = articles_server(ResponseTemplate::new(200).set_body_raw(body, "application/json")).await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    let outcome = renderer.render(&mut page).await;

    assert_eq!(outcome, RenderOutcome::Rendered(2));
    let items = page.list_items("news-list").unwrap();
    assert_eq!(items[0].title, "A");
    assert_eq!(items[0].published_on, "Invalid Date");
    assert_eq!(items[1].title, "");
    assert_eq!(items[1].published_on, "1/15/2024");
}

/// **VALUE**: Verifies a non-JSON body leaves existing content alone.
///
/// **WHY THIS MATTERS**: Clearing happens only on success; a broken response must not
/// blank the page.
///
/// **BUG THIS CATCHES**: Would catch clearing before parsing.
#[tokio::test]
async fn given_non_json_body_when_page_loads_then_list_is_untouched() {
    let server = articles_server(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    let outcome = renderer.render(&mut page).await;

    assert_eq!(outcome, RenderOutcome::Logged);
    assert_eq!(page.list_items("news-list").unwrap(), [stale_item()]);
    assert!(page.notices().is_empty());
}

/// **VALUE**: Verifies a server error leaves existing content alone.
///
/// **BUG THIS CATCHES**: Would catch rendering an error body as an empty list.
#[tokio::test]
async fn given_server_error_when_page_loads_then_list_is_untouched() {
    let server = articles_server(ResponseTemplate::new(500)).await;
    let renderer = NewsRenderer::new(client_for(&server), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    let outcome = renderer.render(&mut page).await;

    assert_eq!(outcome, RenderOutcome::Logged);
    assert_eq!(page.list_items("news-list").unwrap(), [stale_item()]);
}

/// **VALUE**: Verifies transport failure is log-only for the renderer too.
///
/// **BUG THIS CATCHES**: Would catch a notice or a cleared list on connection refused.
#[tokio::test]
async fn given_unreachable_server_when_page_loads_then_nothing_changes() {
    let renderer = NewsRenderer::new(unreachable_client(), utc_formatter());
    let mut page = MemoryPage::new().with_list("news-list", vec![stale_item()]);

    let outcome = renderer.render(&mut page).await;

    assert_eq!(outcome, RenderOutcome::Logged);
    assert_eq!(page.list_items("news-list").unwrap(), [stale_item()]);
    assert!(page.notices().is_empty());
    assert_eq!(page.location(), None);
}
