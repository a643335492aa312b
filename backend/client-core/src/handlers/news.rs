use crate::NewsClient;
use crate::app::MountPoint;
use crate::error::PageError;
use crate::page::Page;
use crate::render::{DateFormatter, ListItem};

use log::{error, info};

/// Result of one page-load render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Container cleared and this many items appended.
    Rendered(usize),
    /// Fetch or parse failed; container untouched.
    Logged,
}

/// Fills `news-list` with the server's articles on page load.
#[derive(Clone, Debug)]
pub struct NewsRenderer {
    client: NewsClient,
    formatter: DateFormatter,
}

impl NewsRenderer {
    pub fn new(client: NewsClient, formatter: DateFormatter) -> Self {
        Self { client, formatter }
    }

    /// Fetch `/articles/fetchAll` and replace the list contents.
    ///
    /// The container is cleared only once a well-formed list is in hand, so
    /// any failure leaves previous content in place.
    pub async fn render<P: Page + ?Sized>(&self, page: &mut P) -> RenderOutcome {
        let articles = match self.client.fetch_all_articles().await {
            Ok(articles) => articles,
            Err(e) => {
                error!("Error fetching articles: {e}");
                return RenderOutcome::Logged;
            }
        };

        let list_id = MountPoint::NewsList.id();
        let Some(list) = page.list_mut(list_id) else {
            error!(
                "Error fetching articles: {}",
                PageError::missing_element(list_id)
            );
            return RenderOutcome::Logged;
        };

        list.clear();
        for article in &articles {
            list.append(ListItem::from_article(article, &self.formatter));
        }

        info!("Rendered {} articles into {list_id}", articles.len());
        RenderOutcome::Rendered(articles.len())
    }
}
