//! Application start: bind a handler to every mount point the page has.

use crate::NewsClient;
use crate::error::PageError;
use crate::handlers::{AuthSubmitter, NewsRenderer, RenderOutcome, SettingsSubmitter, SubmitOutcome};
use crate::page::{Document, Page};
use crate::render::DateFormatter;

use models::{Credentials, FormRequest, Registration, SettingsUpdate};

use log::{debug, info};

/// Element ids the client knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    LoginForm,
    RegisterForm,
    SettingsForm,
    NewsList,
}

impl MountPoint {
    pub const ALL: [MountPoint; 4] = [
        MountPoint::LoginForm,
        MountPoint::RegisterForm,
        MountPoint::SettingsForm,
        MountPoint::NewsList,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::LoginForm => Credentials::FORM_ID,
            MountPoint::RegisterForm => Registration::FORM_ID,
            MountPoint::SettingsForm => SettingsUpdate::FORM_ID,
            MountPoint::NewsList => "news-list",
        }
    }
}

/// Handlers bound for one page load.
///
/// Built once by [`App::start`]; a handler whose element was absent at
/// start stays unbound for the life of the page.
#[derive(Clone, Debug, Default)]
pub struct App {
    login: Option<AuthSubmitter>,
    register: Option<AuthSubmitter>,
    settings: Option<SettingsSubmitter>,
    news: Option<NewsRenderer>,
}

impl App {
    /// For each known mount point present on `document`, bind its handler.
    pub fn start<D: Document + ?Sized>(
        document: &D,
        client: &NewsClient,
        formatter: DateFormatter,
    ) -> Self {
        let mut app = App::default();

        for mount in MountPoint::ALL {
            if !document.has_element(mount.id()) {
                debug!("No #{} on page, handler not bound", mount.id());
                continue;
            }

            match mount {
                MountPoint::LoginForm => app.login = Some(AuthSubmitter::new(client.clone())),
                MountPoint::RegisterForm => {
                    app.register = Some(AuthSubmitter::new(client.clone()))
                }
                MountPoint::SettingsForm => {
                    app.settings = Some(SettingsSubmitter::new(client.clone()))
                }
                MountPoint::NewsList => {
                    app.news = Some(NewsRenderer::new(client.clone(), formatter))
                }
            }
            info!("Bound handler for #{}", mount.id());
        }

        app
    }

    pub fn is_bound(&self, mount: MountPoint) -> bool {
        match mount {
            MountPoint::LoginForm => self.login.is_some(),
            MountPoint::RegisterForm => self.register.is_some(),
            MountPoint::SettingsForm => self.settings.is_some(),
            MountPoint::NewsList => self.news.is_some(),
        }
    }

    /// Mount points that received a handler.
    pub fn bound(&self) -> Vec<MountPoint> {
        MountPoint::ALL
            .into_iter()
            .filter(|mount| self.is_bound(*mount))
            .collect()
    }

    /// Page-load event: render the news list if it was bound.
    ///
    /// Returns `None` when the page has no news list.
    pub async fn load<P: Page + ?Sized>(&self, page: &mut P) -> Option<RenderOutcome> {
        match &self.news {
            Some(renderer) => Some(renderer.render(page).await),
            None => None,
        }
    }

    /// Submit event on one of the forms.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Unbound`] if the form was not on the page at start,
    /// or if `mount` is not a form.
    pub async fn submit<P: Page + ?Sized>(
        &self,
        mount: MountPoint,
        page: &mut P,
    ) -> Result<SubmitOutcome, PageError> {
        match (mount, &self.login, &self.register, &self.settings) {
            (MountPoint::LoginForm, Some(auth), _, _) => Ok(auth.login(page).await),
            (MountPoint::RegisterForm, _, Some(auth), _) => Ok(auth.register(page).await),
            (MountPoint::SettingsForm, _, _, Some(settings)) => {
                Ok(settings.update_settings(page).await)
            }
            _ => Err(PageError::unbound(mount.id())),
        }
    }
}
