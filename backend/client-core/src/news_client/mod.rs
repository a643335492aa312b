use crate::config::ServerConfig;
use crate::error::news_client::NewsClientError;
use crate::{
    ARTICLES_FETCH_ALL_ENDPOINT, ARTICLES_FETCH_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT,
    SETTINGS_ENDPOINT,
};

use common::HttpStatusCode;
use models::{Article, ArticleQuery, Credentials, FormRequest, Registration, SettingsUpdate};

use std::time::Duration;

use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for the news server.
///
/// One request per call: no retries, no caching. Without a configured
/// timeout a hung request simply never resolves.
#[derive(Clone, Debug)]
pub struct NewsClient {
    base_url: Url,
    client: Client,
}

impl NewsClient {
    pub fn new(base_url_str: &str) -> Result<Self, NewsClientError> {
        Self::with_timeout(base_url_str, None)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, NewsClientError> {
        let base_url = Url::parse(base_url_str)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, NewsClientError> {
        Self::with_timeout(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST `form` to `endpoint` as `application/x-www-form-urlencoded`.
    ///
    /// Any response, whatever its status, is `Ok`; the caller branches on it.
    ///
    /// # Errors
    ///
    /// Returns [`NewsClientError::Http`] if no response arrives.
    pub async fn submit_form<F: FormRequest>(
        &self,
        endpoint: &str,
        form: &F,
    ) -> Result<HttpStatusCode, NewsClientError> {
        let url = self.base_url.join(endpoint)?;
        debug!("POST {url} ({})", F::FORM_ID);

        let response = self
            .client
            .post(url)
            .form(&form.form_fields())
            .send()
            .await?;

        Ok(HttpStatusCode(response.status().as_u16()))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<HttpStatusCode, NewsClientError> {
        self.submit_form(LOGIN_ENDPOINT, credentials).await
    }

    pub async fn register(
        &self,
        registration: &Registration,
    ) -> Result<HttpStatusCode, NewsClientError> {
        self.submit_form(REGISTER_ENDPOINT, registration).await
    }

    pub async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> Result<HttpStatusCode, NewsClientError> {
        self.submit_form(SETTINGS_ENDPOINT, update).await
    }

    /// GET `/articles/fetchAll` with the server's default paging.
    pub async fn fetch_all_articles(&self) -> Result<Vec<Article>, NewsClientError> {
        let url = self.base_url.join(ARTICLES_FETCH_ALL_ENDPOINT)?;
        self.get_json(url).await
    }

    /// GET `/articles/fetchAll` with explicit paging and ordering.
    pub async fn fetch_articles(
        &self,
        query: &ArticleQuery,
    ) -> Result<Vec<Article>, NewsClientError> {
        let mut url = self.base_url.join(ARTICLES_FETCH_ALL_ENDPOINT)?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        self.get_json(url).await
    }

    /// GET `/articles/fetch/{id}`.
    pub async fn fetch_article(&self, id: i64) -> Result<Article, NewsClientError> {
        let url = self
            .base_url
            .join(&format!("{ARTICLES_FETCH_ENDPOINT}/{id}"))?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, NewsClientError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}

async fn ensure_success(response: Response) -> Result<Response, NewsClientError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    Err(NewsClientError::server(
        status,
        response.text().await.unwrap_or_default(),
    ))
}
