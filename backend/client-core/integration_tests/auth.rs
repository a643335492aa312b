use crate::helpers::{
    FORM_CONTENT_TYPE, client_for, login_page, mock_server, register_page, unreachable_client,
};

use client_core::handlers::auth::{LOGIN_FAILED_NOTICE, REGISTRATION_FAILED_NOTICE};
use client_core::handlers::{AuthSubmitter, SubmitOutcome};
use client_core::page::MemoryPage;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a successful login sends the form-encoded body and goes home.
///
/// **WHY THIS MATTERS**: This is the main login path; the server binds fields by name
/// from a form-encoded body.
///
/// **BUG THIS CATCHES**: Would catch JSON bodies, wrong field names, or a wrong redirect.
#[tokio::test]
async fn given_accepted_login_when_submitting_then_navigates_home() {
    // GIVEN: A server accepting exactly this body
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string("username=alice&password=secret1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = AuthSubmitter::new(client_for(&server));
    let mut page = login_page("alice", "secret1");

    // WHEN: Submitting
    let outcome = submitter.login(&mut page).await;

    // THEN: Location is "/" and nothing was announced
    assert_eq!(outcome, SubmitOutcome::Navigated("/"));
    assert_eq!(page.location(), Some("/"));
    assert!(page.notices().is_empty());
}

/// **VALUE**: Verifies a rejected login shows the generic notice and stays put.
///
/// **WHY THIS MATTERS**: Users must learn the login failed; the body detail is not shown.
///
/// **BUG THIS CATCHES**: Would catch navigation on 401 or leaking the server message.
#[tokio::test]
async fn given_rejected_login_when_submitting_then_shows_failure_notice() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials for alice"))
        .mount(&server)
        .await;

    let submitter = AuthSubmitter::new(client_for(&server));
    let mut page = login_page("alice", "wrong");

    let outcome = submitter.login(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(LOGIN_FAILED_NOTICE));
    assert_eq!(page.notices(), [LOGIN_FAILED_NOTICE]);
    assert_eq!(page.location(), None);
}

/// **VALUE**: Verifies registration posts three fields and goes to the login page.
///
/// **WHY THIS MATTERS**: A new user must land on the login form after registering.
///
/// **BUG THIS CATCHES**: Would catch redirecting to "/" instead of "/login".
#[tokio::test]
async fn given_accepted_registration_when_submitting_then_navigates_to_login() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_string(
            "username=bob&email=bob%40example.com&password=secret1",
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = AuthSubmitter::new(client_for(&server));
    let mut page = register_page("bob", "bob@example.com", "secret1");

    let outcome = submitter.register(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Navigated("/login"));
    assert_eq!(page.location(), Some("/login"));
}

/// **VALUE**: Verifies validation and server errors collapse into one notice.
///
/// **WHY THIS MATTERS**: The client shows no server detail for either kind of rejection.
///
/// **BUG THIS CATCHES**: Would catch status-specific branches creeping in.
#[tokio::test]
async fn given_rejected_registration_when_submitting_then_shows_same_notice_for_400_and_500() {
    for status in [400, 500] {
        let server = mock_server().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let submitter = AuthSubmitter::new(client_for(&server));
        let mut page = register_page("bob", "bob@example.com", "secret1");

        let outcome = submitter.register(&mut page).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(REGISTRATION_FAILED_NOTICE));
        assert_eq!(page.location(), None);
    }
}

/// **VALUE**: Verifies transport failure is log-only: no notice, no navigation.
///
/// **WHY THIS MATTERS**: This is the documented silent-failure path.
///
/// **BUG THIS CATCHES**: Would catch a failure notice or a panic on connection refused.
#[tokio::test]
async fn given_unreachable_server_when_logging_in_then_nothing_is_visible() {
    let submitter = AuthSubmitter::new(unreachable_client());
    let mut page = login_page("alice", "secret1");

    let outcome = submitter.login(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Logged);
    assert!(page.notices().is_empty());
    assert_eq!(page.location(), None);
}

/// **VALUE**: Verifies transport failure on registration is log-only as well.
///
/// **BUG THIS CATCHES**: Would catch the registration path showing its failure notice
/// or navigating when no response arrived.
#[tokio::test]
async fn given_unreachable_server_when_registering_then_nothing_is_visible() {
    let submitter = AuthSubmitter::new(unreachable_client());
    let mut page = register_page("alice", "alice@example.com", "secret1");

    let outcome = submitter.register(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Logged);
    assert!(page.notices().is_empty());
    assert_eq!(page.location(), None);
}

/// **VALUE**: Verifies two quick submissions send two requests.
///
/// **WHY THIS MATTERS**: There is no in-flight guard; this pins that behaviour.
///
/// **BUG THIS CATCHES**: Would catch accidental de-duplication or request coalescing.
#[tokio::test]
async fn given_two_rapid_logins_when_submitting_then_two_requests_are_sent() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let submitter = AuthSubmitter::new(client_for(&server));
    let mut first = login_page("alice", "secret1");
    let mut second = login_page("alice", "secret1");

    let (a, b) = tokio::join!(submitter.login(&mut first), submitter.login(&mut second));

    assert_eq!(a, SubmitOutcome::Navigated("/"));
    assert_eq!(b, SubmitOutcome::Navigated("/"));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

/// **VALUE**: Verifies a form missing a control sends nothing.
///
/// **WHY THIS MATTERS**: A broken template must not post half a body.
///
/// **BUG THIS CATCHES**: Would catch empty-string substitution for missing controls.
#[tokio::test]
async fn given_login_form_without_password_when_submitting_then_no_request_is_sent() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let submitter = AuthSubmitter::new(client_for(&server));
    let mut page = MemoryPage::new().with_form("login-form", [("username", "alice")]);

    let outcome = submitter.login(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Logged);
    assert!(page.notices().is_empty());
}
