use crate::helpers::{FORM_CONTENT_TYPE, client_for, mock_server, settings_page, unreachable_client};

use client_core::handlers::settings::{SETTINGS_FAILED_NOTICE, SETTINGS_UPDATED_NOTICE};
use client_core::handlers::{SettingsSubmitter, SubmitOutcome};

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies an accepted update confirms without navigating.
///
/// **WHY THIS MATTERS**: Unlike auth, settings keep the user on the page.
///
/// **BUG THIS CATCHES**: Would catch the settings route reusing a navigate action.
#[tokio::test]
async fn given_accepted_settings_when_submitting_then_confirms_without_navigation() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/settings"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string("preferredCategory=science+%26+tech"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = SettingsSubmitter::new(client_for(&server));
    let mut page = settings_page("science & tech");

    let outcome = submitter.update_settings(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Confirmed(SETTINGS_UPDATED_NOTICE));
    assert_eq!(page.notices(), [SETTINGS_UPDATED_NOTICE]);
    assert_eq!(page.location(), None);
}

/// **VALUE**: Verifies a rejected update shows the failure notice.
///
/// **BUG THIS CATCHES**: Would catch the success notice shown for a 4xx.
#[tokio::test]
async fn given_rejected_settings_when_submitting_then_shows_failure_notice() {
    let server = mock_server().await;
    Mock::given(method("POST"))
        .and(path("/settings"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let submitter = SettingsSubmitter::new(client_for(&server));
    let mut page = settings_page("");

    let outcome = submitter.update_settings(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(SETTINGS_FAILED_NOTICE));
    assert_eq!(page.location(), None);
}

/// **VALUE**: Verifies transport failure on settings is log-only.
///
/// **BUG THIS CATCHES**: Would catch a notice on connection refused.
#[tokio::test]
async fn given_unreachable_server_when_updating_settings_then_nothing_is_visible() {
    let submitter = SettingsSubmitter::new(unreachable_client());
    let mut page = settings_page("sports");

    let outcome = submitter.update_settings(&mut page).await;

    assert_eq!(outcome, SubmitOutcome::Logged);
    assert!(page.notices().is_empty());
}
