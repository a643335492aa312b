use client_core::config::AppConfig;

use news::cli::{Action, GlobalArgs, Paging};
use news::commands::{article_query, execute, resolve_config};
use news::error::NewsError;

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.base_url = server.uri();
    config.display.utc_offset_minutes = Some(0);
    config
}

/// **VALUE**: Verifies `news login` posts the form and reports the redirect.
///
/// **WHY THIS MATTERS**: The CLI drives the same start-then-submit path the page does.
///
/// **BUG THIS CATCHES**: Would catch the command skipping `App::start` or losing fields.
#[tokio::test]
async fn given_accepting_server_when_executing_login_then_reports_home_location() {
    // GIVEN: A server accepting logins
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("username=alice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Executing the login action
    let report = execute(
        Action::Login {
            username: String::from("alice"),
            password: String::from("secret1"),
        },
        &config_for(&server),
    )
    .await
    .unwrap();

    // THEN: Navigated home, no notices
    assert!(report.succeeded);
    assert_eq!(report.location.as_deref(), Some("/"));
    assert!(report.notices.is_empty());
}

/// **VALUE**: Verifies a rejected registration reports the failure notice.
///
/// **BUG THIS CATCHES**: Would catch the CLI reporting success on a 4xx.
#[tokio::test]
async fn given_rejecting_server_when_executing_register_then_reports_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(
        Action::Register {
            username: String::from("alice"),
            email: String::from("a@x.io"),
            password: String::from("p"),
        },
        &config_for(&server),
    )
    .await
    .unwrap();

    assert!(!report.succeeded);
    assert_eq!(report.location, None);
    assert_eq!(
        report.notices,
        vec![String::from("Registration failed. Please try again.")]
    );
}

/// **VALUE**: Verifies settings confirmation surfaces as a notice with success.
///
/// **BUG THIS CATCHES**: Would catch the settings route navigating instead of notifying.
#[tokio::test]
async fn given_accepting_server_when_executing_settings_then_reports_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/settings"))
        .and(body_string_contains("preferredCategory=sports"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(
        Action::Settings {
            preferred_category: String::from("sports"),
        },
        &config_for(&server),
    )
    .await
    .unwrap();

    assert!(report.succeeded);
    assert_eq!(
        report.notices,
        vec![String::from("Settings updated successfully.")]
    );
}

/// **VALUE**: Verifies a plain `articles` run renders through the page-load path.
///
/// **BUG THIS CATCHES**: Would catch dates rendered without the configured offset.
#[tokio::test]
async fn given_articles_when_executing_plain_load_then_reports_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"title":"A","content":"B","publishedDate":"2024-01-15T00:00:00Z"}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(Action::Articles { paging: None }, &config_for(&server))
        .await
        .unwrap();

    assert!(report.succeeded);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].published_on, "1/15/2024");
}

/// **VALUE**: Verifies a server error on load is reported as failure, not an Err.
///
/// **WHY THIS MATTERS**: Fetch failures are log-only; the process exit code carries them.
///
/// **BUG THIS CATCHES**: Would catch a 500 being rendered as an empty list.
#[tokio::test]
async fn given_server_error_when_executing_plain_load_then_report_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(Action::Articles { paging: None }, &config_for(&server))
        .await
        .unwrap();

    assert!(!report.succeeded);
    assert!(report.items.is_empty());
}

/// **VALUE**: Verifies paging flags reach the server as query parameters.
///
/// **BUG THIS CATCHES**: Would catch `--size`/`--sort` being dropped.
#[tokio::test]
async fn given_paging_when_executing_articles_then_query_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetchAll"))
        .and(query_param("page", "2"))
        .and(query_param("size", "5"))
        .and(query_param("sort", "title,desc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(
        Action::Articles {
            paging: Some(Paging {
                page: Some(2),
                size: Some(5),
                sort: vec![String::from("title,desc")],
            }),
        },
        &config_for(&server),
    )
    .await
    .unwrap();

    assert!(report.succeeded);
    assert!(report.items.is_empty());
}

/// **VALUE**: Verifies a single article is fetched by id.
///
/// **BUG THIS CATCHES**: Would catch the id missing from the path.
#[tokio::test]
async fn given_article_id_when_executing_article_then_reports_one_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/fetch/42"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":42,"title":"T","content":"C","publishedDate":"2024-03-01"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let report = execute(Action::Article { id: 42 }, &config_for(&server))
        .await
        .unwrap();

    assert!(report.succeeded);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].title, "T");
    assert_eq!(report.items[0].published_on, "3/1/2024");
}

/// **VALUE**: Verifies a zero page size is a usage error before any request.
///
/// **BUG THIS CATCHES**: Would catch invalid paging reaching the server.
#[test]
fn given_zero_size_when_building_query_then_usage_error() {
    let paging = Paging {
        page: None,
        size: Some(0),
        sort: Vec::new(),
    };

    let result = article_query(&paging);

    assert!(matches!(result, Err(NewsError::Usage { .. })));
}

/// **VALUE**: Verifies `--base-url` wins over the config file.
///
/// **WHY THIS MATTERS**: Pointing one run at a staging server must not require editing config.
///
/// **BUG THIS CATCHES**: Would catch the flag being applied before the file is loaded.
#[test]
fn given_config_file_and_flag_when_resolving_then_flag_wins() {
    // GIVEN: A saved config pointing elsewhere
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut saved = AppConfig::default();
    saved.server.base_url = String::from("http://saved.example:8080");
    saved.save(temp_dir.path()).unwrap();

    let globals = GlobalArgs {
        base_url: Some(String::from("http://flag.example:9090")),
        config_dir: Some(temp_dir.path().to_path_buf()),
        ..GlobalArgs::default()
    };

    // WHEN: Resolving
    let config = resolve_config(&globals).unwrap();

    // THEN: The flag's URL is used
    assert_eq!(config.server.base_url, "http://flag.example:9090");
}

/// **VALUE**: Verifies an invalid `--base-url` is rejected.
///
/// **BUG THIS CATCHES**: Would catch the override skipping validation, or the error
/// location pointing into the standard library instead of the command.
#[test]
fn given_invalid_flag_url_when_resolving_then_returns_core_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let globals = GlobalArgs {
        base_url: Some(String::from("ftp://nope")),
        config_dir: Some(temp_dir.path().to_path_buf()),
        ..GlobalArgs::default()
    };

    let result = resolve_config(&globals);

    match result {
        Err(NewsError::Core { location, .. }) => {
            assert!(location.file.ends_with("commands.rs"), "{}", location.file);
            assert!(!location.file.contains("rustc"), "{}", location.file);
        }
        other => panic!("Expected Core error, got {other:?}"),
    }
}
