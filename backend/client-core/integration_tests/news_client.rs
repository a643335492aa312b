use crate::helpers::{client_for, mock_server, unreachable_client};

use client_core::NewsClient;
use client_core::error::NewsClientError;

use models::{ArticleQueryBuilder, Credentials, SortDirection};

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies paging parameters reach the server.
///
/// **WHY THIS MATTERS**: `fetchAll` defaults to 10 articles; larger pages need explicit params.
///
/// **BUG THIS CATCHES**: Would catch query pairs being dropped or misnamed.
#[tokio::test]
async fn given_article_query_when_fetching_then_sends_page_size_and_sort() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .and(query_param("page", "1"))
        .and(query_param("size", "25"))
        .and(query_param("sort", "publishedAt,desc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":3,"title":"T","content":"C","source":"Wire","publishedAt":"2024-02-02T08:00:00"}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let query = ArticleQueryBuilder::default()
        .with_page(1)
        .with_size(25)
        .sort_by("publishedAt", SortDirection::Desc)
        .build()
        .unwrap();

    let articles = client_for(&server).fetch_articles(&query).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, Some(3));
    assert_eq!(articles[0].published_date, "2024-02-02T08:00:00");
}

/// **VALUE**: Verifies single-article fetch and 404 mapping.
///
/// **WHY THIS MATTERS**: A missing article must be a rejected response, not a parse error.
///
/// **BUG THIS CATCHES**: Would catch trying to parse the 404 body as an article.
#[tokio::test]
async fn given_article_ids_when_fetching_then_found_and_missing_are_distinguished() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetch/7"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":7,"title":"Seven","content":"C","publishedDate":"2024-01-15"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/articles/fetch/8"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Article not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let found = client.fetch_article(7).await.unwrap();
    assert_eq!(found.title, "Seven");

    let missing = client.fetch_article(8).await.unwrap_err();
    assert!(!missing.is_transport());
    assert_eq!(missing.status_code().map(|s| s.as_u16()), Some(404));
    assert_eq!(missing.error_category(), "client_error");
}

/// **VALUE**: Verifies a non-2xx write is `Ok(status)`, not an error.
///
/// **WHY THIS MATTERS**: Handlers need the status to choose the failure notice; only
/// transport problems are errors.
///
/// **BUG THIS CATCHES**: Would catch `error_for_status()` being added to `submit_form`.
#[tokio::test]
async fn given_rejected_write_when_submitting_then_returns_status_not_error() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let status = client_for(&server)
        .login(&Credentials::new("alice", "secret1"))
        .await
        .unwrap();

    assert_eq!(status.as_u16(), 403);
    assert!(!status.is_success());
}

/// **VALUE**: Verifies connection failures are classified as transport errors.
///
/// **WHY THIS MATTERS**: Transport errors are the log-only branch.
///
/// **BUG THIS CATCHES**: Would catch reqwest errors mapped to another variant.
#[tokio::test]
async fn given_unreachable_server_when_fetching_then_returns_transport_error() {
    let error = unreachable_client().fetch_all_articles().await.unwrap_err();

    assert!(error.is_transport(), "Expected transport error, got {error}");
    assert!(matches!(error, NewsClientError::Http { .. }));
}

/// **VALUE**: Verifies a configured timeout turns a hung request into a transport error.
///
/// **WHY THIS MATTERS**: Without a timeout a hung request never resolves; with one the
/// user gets the same log-only outcome as any other transport failure.
///
/// **BUG THIS CATCHES**: Would catch the timeout setting being ignored.
#[tokio::test]
async fn given_timeout_when_server_hangs_then_returns_timeout_error() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = NewsClient::with_timeout(&server.uri(), Some(Duration::from_millis(200))).unwrap();

    let error = client.fetch_all_articles().await.unwrap_err();

    assert!(error.is_transport());
    assert_eq!(error.error_category(), "timeout");
}

/// **VALUE**: Verifies a malformed base URL is rejected at construction.
///
/// **BUG THIS CATCHES**: Would catch deferred URL errors at first request.
#[test]
fn given_malformed_base_url_when_creating_client_then_returns_url_error() {
    let result = NewsClient::new("not a url");

    assert!(matches!(result, Err(NewsClientError::UrlParse { .. })));
}
