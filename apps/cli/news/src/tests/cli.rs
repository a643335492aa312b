// Unit tests for argument parsing and dispatch

use crate::cli::{Action, Paging, dispatch, global_args, new};

/// **VALUE**: Verifies login arguments map onto a login action.
///
/// **BUG THIS CATCHES**: Would catch swapped username/password.
#[test]
fn given_login_args_when_dispatching_then_returns_login_action() {
    let matches = new()
        .try_get_matches_from(["news", "login", "-u", "alice", "--password", "secret1"])
        .unwrap();

    let action = dispatch(&matches).unwrap();

    assert_eq!(
        action,
        Action::Login {
            username: String::from("alice"),
            password: String::from("secret1"),
        }
    );
}

/// **VALUE**: Verifies `articles` with no paging flags is a plain page load.
///
/// **WHY THIS MATTERS**: The plain load goes through the page-load renderer; paging
/// flags switch to the explicit query.
///
/// **BUG THIS CATCHES**: Would catch always building a paged query.
#[test]
fn given_articles_with_and_without_paging_when_dispatching_then_paging_is_optional() {
    let plain = new().try_get_matches_from(["news", "articles"]).unwrap();
    assert_eq!(dispatch(&plain).unwrap(), Action::Articles { paging: None });

    let paged = new()
        .try_get_matches_from([
            "news", "articles", "--size", "5", "--sort", "title,asc", "--sort", "id,desc",
        ])
        .unwrap();
    assert_eq!(
        dispatch(&paged).unwrap(),
        Action::Articles {
            paging: Some(Paging {
                page: None,
                size: Some(5),
                sort: vec![String::from("title,asc"), String::from("id,desc")],
            }),
        }
    );
}

/// **VALUE**: Verifies global flags are accepted after the subcommand.
///
/// **BUG THIS CATCHES**: Would catch global flags losing `.global(true)`.
#[test]
fn given_global_flags_after_subcommand_when_parsing_then_globals_are_read() {
    let matches = new()
        .try_get_matches_from([
            "news",
            "article",
            "42",
            "--json",
            "--base-url",
            "http://localhost:9000",
        ])
        .unwrap();

    let globals = global_args(&matches);

    assert!(globals.json);
    assert_eq!(globals.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(dispatch(&matches).unwrap(), Action::Article { id: 42 });
}

/// **VALUE**: Verifies `--json` and `--html` are mutually exclusive.
///
/// **BUG THIS CATCHES**: Would catch mixed output formats on stdout.
#[test]
fn given_json_and_html_when_parsing_then_returns_error() {
    let result = new().try_get_matches_from(["news", "articles", "--json", "--html"]);

    assert!(result.is_err());
}
