use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One entry of the `/articles/fetchAll` response.
///
/// Missing or `null` text fields deserialize as empty strings so a single
/// sparse record cannot reject the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ArticleRecord")]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub published_date: String,
}

/// Article as it arrives on the wire.
///
/// The server's entity names the date `publishedAt`, its DTO `publishedDate`;
/// when both are present the non-null `publishedDate` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            content: record.content.unwrap_or_default(),
            source: record.source,
            published_date: record
                .published_date
                .or(record.published_at)
                .unwrap_or_default(),
        }
    }
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            source: None,
            published_date: published_date.into(),
        }
    }

    /// Parsed publish date, or `None` when the server sent something unreadable.
    pub fn published(&self) -> Option<PublishedDate> {
        PublishedDate::parse(&self.published_date)
    }
}

/// A publish timestamp as the server expressed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedDate {
    /// Absolute instant; shown in the viewer's zone.
    Instant(DateTime<FixedOffset>),
    /// Wall-clock time with no zone; shown as-is.
    Local(NaiveDateTime),
}

impl PublishedDate {
    /// Accepts RFC 3339, a zoneless `YYYY-MM-DDTHH:MM[:SS[.fff]]`, or a bare
    /// `YYYY-MM-DD` (taken as UTC midnight).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(instant));
        }

        if let Ok(local) = raw.parse::<NaiveDateTime>() {
            return Some(Self::Local(local));
        }

        if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
            return Some(Self::Local(local));
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Self::Instant(midnight.and_utc().fixed_offset()))
    }
}
