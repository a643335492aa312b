use crate::helpers::{client_for, mock_server};

use client_core::handlers::auth::LOGIN_FAILED_NOTICE;
use client_core::handlers::{RenderOutcome, SubmitOutcome};
use client_core::page::MemoryPage;
use client_core::render::{DateFormatter, DateLocale};
use client_core::{App, MountPoint};

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Drives a full page: start, load, then submit, through the app routine.
///
/// **WHY THIS MATTERS**: Proves the start routine wires each handler to its own
/// endpoint and that handlers on one page do not interfere.
///
/// **BUG THIS CATCHES**: Would catch a mount point bound to the wrong handler.
#[tokio::test]
async fn given_page_with_news_and_login_when_loading_and_submitting_then_each_handler_runs() {
    // GIVEN: A server with articles and a rejecting login
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"title":"A","content":"B","publishedDate":"2024-01-15T00:00:00Z"}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = MemoryPage::new()
        .with_form("login-form", [("username", "alice"), ("password", "nope")])
        .with_list("news-list", vec![]);
    let app = App::start(
        &page,
        &client_for(&server),
        DateFormatter::fixed(DateLocale::Iso, 0),
    );

    // WHEN: Loading, then submitting login
    let loaded = app.load(&mut page).await;
    let submitted = app.submit(MountPoint::LoginForm, &mut page).await.unwrap();

    // THEN: List rendered and login rejected independently
    assert_eq!(loaded, Some(RenderOutcome::Rendered(1)));
    assert_eq!(page.list_items("news-list").unwrap()[0].published_on, "2024-01-15");
    assert_eq!(submitted, SubmitOutcome::Rejected(LOGIN_FAILED_NOTICE));
    assert_eq!(page.location(), None);
}
