use crate::handlers::{OnSuccess, SubmitOutcome, SubmitRoute, submit_and_branch};
use crate::page::Page;
use crate::{HOME_PATH, LOGIN_ENDPOINT, LOGIN_PATH, NewsClient, REGISTER_ENDPOINT};

use models::{Credentials, Registration};

pub const LOGIN_FAILED_NOTICE: &str = "Login failed. Please check your credentials.";
pub const REGISTRATION_FAILED_NOTICE: &str = "Registration failed. Please try again.";

pub const LOGIN_ROUTE: SubmitRoute = SubmitRoute {
    endpoint: LOGIN_ENDPOINT,
    on_success: OnSuccess::Navigate(HOME_PATH),
    failure_notice: LOGIN_FAILED_NOTICE,
    log_context: "Error during login",
};

pub const REGISTER_ROUTE: SubmitRoute = SubmitRoute {
    endpoint: REGISTER_ENDPOINT,
    on_success: OnSuccess::Navigate(LOGIN_PATH),
    failure_notice: REGISTRATION_FAILED_NOTICE,
    log_context: "Error during registration",
};

/// Login and registration forms.
///
/// Holds no in-flight state: submitting twice sends two requests.
#[derive(Clone, Debug)]
pub struct AuthSubmitter {
    client: NewsClient,
}

impl AuthSubmitter {
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }

    /// `login-form` submit: navigate to `/` on 2xx.
    pub async fn login<P: Page + ?Sized>(&self, page: &mut P) -> SubmitOutcome {
        submit_and_branch::<Credentials, P>(&self.client, &LOGIN_ROUTE, page).await
    }

    /// `register-form` submit: navigate to `/login` on 2xx.
    pub async fn register<P: Page + ?Sized>(&self, page: &mut P) -> SubmitOutcome {
        submit_and_branch::<Registration, P>(&self.client, &REGISTER_ROUTE, page).await
    }
}
