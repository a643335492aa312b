//! Turn an [`Action`] into one page event against the news server.
//!
//! Each command builds an in-memory page holding only the mount point it
//! needs, runs the start routine, fires the event and reports what the
//! page ended up showing.

use crate::cli::{Action, GlobalArgs, Paging};
use crate::error::NewsError;
use crate::report::PageReport;

use client_core::config::{AppConfig, default_config_dir};
use client_core::page::MemoryPage;
use client_core::render::{DateFormatter, ListItem};
use client_core::{App, MountPoint, NewsClient};

use models::form::{EMAIL_FIELD, PASSWORD_FIELD, PREFERRED_CATEGORY_FIELD, USERNAME_FIELD};
use models::{ArticleQuery, ArticleQueryBuilder};

use log::{error, info};

/// Config file, then env override, then `--base-url`.
pub fn resolve_config(globals: &GlobalArgs) -> Result<AppConfig, NewsError> {
    let config_dir = match &globals.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir().map_err(|e| NewsError::core(e))?,
    };

    let mut config = AppConfig::load(&config_dir).map_err(|e| NewsError::core(e))?;
    config.apply_env_overrides().map_err(|e| NewsError::core(e))?;

    if let Some(base_url) = &globals.base_url {
        config.server.base_url = base_url.clone();
        config.validate().map_err(|e| NewsError::core(e))?;
    }

    Ok(config)
}

pub async fn execute(action: Action, config: &AppConfig) -> Result<PageReport, NewsError> {
    let client = NewsClient::from_config(&config.server).map_err(|e| NewsError::core(e))?;
    let formatter = config.display.date_formatter();
    info!("Using news server at {}", client.base_url());

    match action {
        Action::Login { username, password } => {
            let page = MemoryPage::new().with_form(
                MountPoint::LoginForm.id(),
                [(USERNAME_FIELD, username), (PASSWORD_FIELD, password)],
            );
            submit(MountPoint::LoginForm, page, &client, formatter).await
        }
        Action::Register {
            username,
            email,
            password,
        } => {
            let page = MemoryPage::new().with_form(
                MountPoint::RegisterForm.id(),
                [
                    (USERNAME_FIELD, username),
                    (EMAIL_FIELD, email),
                    (PASSWORD_FIELD, password),
                ],
            );
            submit(MountPoint::RegisterForm, page, &client, formatter).await
        }
        Action::Settings { preferred_category } => {
            let page = MemoryPage::new().with_form(
                MountPoint::SettingsForm.id(),
                [(PREFERRED_CATEGORY_FIELD, preferred_category)],
            );
            submit(MountPoint::SettingsForm, page, &client, formatter).await
        }
        Action::Articles { paging: None } => load_news(&client, formatter).await,
        Action::Articles {
            paging: Some(paging),
        } => {
            let query = article_query(&paging)?;
            match client.fetch_articles(&query).await {
                Ok(articles) => Ok(PageReport::from_items(
                    articles
                        .iter()
                        .map(|article| ListItem::from_article(article, &formatter))
                        .collect(),
                )),
                Err(e) => {
                    error!("Error fetching articles: {e}");
                    Ok(PageReport::failed())
                }
            }
        }
        Action::Article { id } => match client.fetch_article(id).await {
            Ok(article) => Ok(PageReport::from_items(vec![ListItem::from_article(
                &article, &formatter,
            )])),
            Err(e) => {
                error!("Error fetching article {id}: {e}");
                Ok(PageReport::failed())
            }
        },
    }
}

async fn submit(
    mount: MountPoint,
    mut page: MemoryPage,
    client: &NewsClient,
    formatter: DateFormatter,
) -> Result<PageReport, NewsError> {
    let app = App::start(&page, client, formatter);
    let outcome = app
        .submit(mount, &mut page)
        .await
        .map_err(|e| NewsError::core(e))?;
    Ok(PageReport::from_submit(&outcome, &page))
}

async fn load_news(client: &NewsClient, formatter: DateFormatter) -> Result<PageReport, NewsError> {
    let mut page = MemoryPage::new().with_list(MountPoint::NewsList.id(), Vec::new());
    let app = App::start(&page, client, formatter);

    let outcome = app
        .load(&mut page)
        .await
        .ok_or_else(|| NewsError::core("news list was not bound at start"))?;
    Ok(PageReport::from_render(&outcome, &page))
}

/// Build the paged query, mapping builder errors to usage errors.
pub fn article_query(paging: &Paging) -> Result<ArticleQuery, NewsError> {
    let mut builder = ArticleQueryBuilder::default();
    if let Some(page) = paging.page {
        builder = builder.with_page(page);
    }
    if let Some(size) = paging.size {
        builder = builder.with_size(size);
    }
    for spec in &paging.sort {
        builder = builder
            .sort_spec(spec)
            .map_err(|e| NewsError::usage(e.to_string()))?;
    }
    builder.build().map_err(|e| NewsError::usage(e.to_string()))
}
