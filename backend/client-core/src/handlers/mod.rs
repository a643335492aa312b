//! Page-event handlers.
//!
//! Every write handler is the same shape: read a typed form, POST it,
//! branch on 2xx. [`submit_and_branch`] is that shape; the handler modules
//! only supply endpoints, notices and the success action.

pub mod auth;
pub mod news;
pub mod settings;

pub use auth::AuthSubmitter;
pub use news::{NewsRenderer, RenderOutcome};
pub use settings::SettingsSubmitter;

use crate::NewsClient;
use crate::page::{FormView, Page};

use models::FormRequest;

use log::{debug, error, warn};

/// What the user ended up seeing after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the page moved to this path.
    Navigated(&'static str),
    /// Accepted; this confirmation was shown.
    Confirmed(&'static str),
    /// Non-2xx; this failure notice was shown.
    Rejected(&'static str),
    /// Nothing visible; the failure went to the log only.
    Logged,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Navigated(_) | SubmitOutcome::Confirmed(_))
    }

    /// Notice the user saw, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Confirmed(message) | SubmitOutcome::Rejected(message) => Some(*message),
            _ => None,
        }
    }
}

/// Success action for a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnSuccess {
    Navigate(&'static str),
    Notify(&'static str),
}

/// Endpoint and response branches for one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitRoute {
    pub endpoint: &'static str,
    pub on_success: OnSuccess,
    pub failure_notice: &'static str,
    /// Prefix for the transport-failure log line.
    pub log_context: &'static str,
}

/// Read `F` from its form on `page`, POST it and branch on the status.
///
/// - 2xx: run `route.on_success`
/// - any other status: show `route.failure_notice`
/// - no response, or the form is missing a control: log only
pub async fn submit_and_branch<F, P>(
    client: &NewsClient,
    route: &SubmitRoute,
    page: &mut P,
) -> SubmitOutcome
where
    F: FormRequest,
    P: Page + ?Sized,
{
    let form = match F::read_from(&FormView::new(&*page, F::FORM_ID)) {
        Ok(form) => form,
        Err(e) => {
            error!("{}: {e}", route.log_context);
            return SubmitOutcome::Logged;
        }
    };

    match client.submit_form(route.endpoint, &form).await {
        Ok(status) if status.is_success() => {
            debug!("{} accepted with HTTP {status}", F::FORM_ID);
            match route.on_success {
                OnSuccess::Navigate(path) => {
                    page.navigate(path);
                    SubmitOutcome::Navigated(path)
                }
                OnSuccess::Notify(message) => {
                    page.alert(message);
                    SubmitOutcome::Confirmed(message)
                }
            }
        }
        Ok(status) => {
            warn!("{} rejected with HTTP {status}", F::FORM_ID);
            page.alert(route.failure_notice);
            SubmitOutcome::Rejected(route.failure_notice)
        }
        Err(e) => {
            error!("{}: {e}", route.log_context);
            SubmitOutcome::Logged
        }
    }
}
