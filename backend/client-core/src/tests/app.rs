// Unit tests for the application start routine

use crate::app::{App, MountPoint};
use crate::error::PageError;
use crate::page::MemoryPage;
use crate::render::DateFormatter;
use crate::NewsClient;

fn client() -> NewsClient {
    NewsClient::new("http://127.0.0.1:9").unwrap()
}

/// **VALUE**: Verifies only the mount points present on the page get handlers.
///
/// **WHY THIS MATTERS**: The same client runs on every page; the settings page must
/// not try to render a news list that isn't there.
///
/// **BUG THIS CATCHES**: Would catch unconditional binding.
#[test]
fn given_settings_page_when_starting_then_only_settings_is_bound() {
    let page = MemoryPage::new().with_form("settings-form", [("preferredCategory", "tech")]);

    let app = App::start(&page, &client(), DateFormatter::default());

    assert_eq!(app.bound(), vec![MountPoint::SettingsForm]);
    assert!(!app.is_bound(MountPoint::NewsList));
}

/// **VALUE**: Verifies every mount point binds when all are present.
///
/// **WHY THIS MATTERS**: Handlers are independent; one must not shadow another.
///
/// **BUG THIS CATCHES**: Would catch a match arm binding the wrong slot.
#[test]
fn given_page_with_all_mount_points_when_starting_then_all_are_bound() {
    let page = MemoryPage::new()
        .with_form("login-form", [("username", "a"), ("password", "b")])
        .with_form("register-form", [("username", "a")])
        .with_form("settings-form", [("preferredCategory", "c")])
        .with_list("news-list", vec![]);

    let app = App::start(&page, &client(), DateFormatter::default());

    assert_eq!(app.bound(), MountPoint::ALL.to_vec());
}

/// **VALUE**: Verifies submitting an unbound form is an error, not a request.
///
/// **WHY THIS MATTERS**: No element at start means no listener; nothing may be sent.
///
/// **BUG THIS CATCHES**: Would catch `submit` falling through to another handler.
#[tokio::test]
async fn given_unbound_form_when_submitting_then_returns_unbound_error() {
    let mut page = MemoryPage::new().with_list("news-list", vec![]);
    let app = App::start(&page, &client(), DateFormatter::default());

    let result = app.submit(MountPoint::LoginForm, &mut page).await;

    match result {
        Err(PageError::Unbound { id, .. }) => assert_eq!(id, "login-form"),
        other => panic!("Expected Unbound error, got {other:?}"),
    }
    assert!(page.notices().is_empty());
}

/// **VALUE**: Verifies page load without a news list does nothing.
///
/// **WHY THIS MATTERS**: Login and settings pages have no list to fill.
///
/// **BUG THIS CATCHES**: Would catch a fetch issued on every page.
#[tokio::test]
async fn given_page_without_news_list_when_loading_then_returns_none() {
    let mut page = MemoryPage::new().with_form("login-form", [("username", "a")]);
    let app = App::start(&page, &client(), DateFormatter::default());

    assert_eq!(app.load(&mut page).await, None);
}
