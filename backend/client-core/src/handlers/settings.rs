use crate::handlers::{OnSuccess, SubmitOutcome, SubmitRoute, submit_and_branch};
use crate::page::Page;
use crate::{NewsClient, SETTINGS_ENDPOINT};

use models::SettingsUpdate;

pub const SETTINGS_UPDATED_NOTICE: &str = "Settings updated successfully.";
pub const SETTINGS_FAILED_NOTICE: &str = "Failed to update settings. Please try again.";

pub const SETTINGS_ROUTE: SubmitRoute = SubmitRoute {
    endpoint: SETTINGS_ENDPOINT,
    on_success: OnSuccess::Notify(SETTINGS_UPDATED_NOTICE),
    failure_notice: SETTINGS_FAILED_NOTICE,
    log_context: "Error updating settings",
};

/// `settings-form` submit. Never navigates.
#[derive(Clone, Debug)]
pub struct SettingsSubmitter {
    client: NewsClient,
}

impl SettingsSubmitter {
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }

    pub async fn update_settings<P: Page + ?Sized>(&self, page: &mut P) -> SubmitOutcome {
        submit_and_branch::<SettingsUpdate, P>(&self.client, &SETTINGS_ROUTE, page).await
    }
}
