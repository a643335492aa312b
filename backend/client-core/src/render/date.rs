use models::PublishedDate;

use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

/// What a browser prints for `new Date("garbage").toLocaleDateString()`.
pub const INVALID_DATE: &str = "Invalid Date";

const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Viewer locale for date-only rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// 1/15/2024
    #[default]
    EnUs,
    /// 15/01/2024
    EnGb,
    /// 15.1.2024
    De,
    /// 15/01/2024
    Fr,
    /// 2024-01-15
    Iso,
}

impl DateLocale {
    fn pattern(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb | DateLocale::Fr => "%d/%m/%Y",
            DateLocale::De => "%-d.%-m.%Y",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewerZone {
    System,
    Fixed(FixedOffset),
}

/// Formats publish dates for one viewer: locale pattern plus time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    locale: DateLocale,
    zone: ViewerZone,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::system(DateLocale::default())
    }
}

impl DateFormatter {
    /// Use the machine's local time zone.
    pub fn system(locale: DateLocale) -> Self {
        Self {
            locale,
            zone: ViewerZone::System,
        }
    }

    /// Use a fixed UTC offset. Out-of-range offsets fall back to UTC.
    pub fn fixed(locale: DateLocale, utc_offset_minutes: i32) -> Self {
        let offset = if utc_offset_minutes.abs() <= MAX_OFFSET_MINUTES {
            FixedOffset::east_opt(utc_offset_minutes * 60)
        } else {
            None
        };
        Self {
            locale,
            zone: ViewerZone::Fixed(offset.unwrap_or_else(|| Utc.fix())),
        }
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    /// Calendar date the viewer would see.
    pub fn viewer_date(&self, published: PublishedDate) -> NaiveDate {
        match (published, self.zone) {
            (PublishedDate::Local(local), _) => local.date(),
            (PublishedDate::Instant(instant), ViewerZone::Fixed(offset)) => {
                instant.with_timezone(&offset).date_naive()
            }
            (PublishedDate::Instant(instant), ViewerZone::System) => {
                instant.with_timezone(&Local).date_naive()
            }
        }
    }

    pub fn format(&self, published: Option<PublishedDate>) -> String {
        match published {
            Some(published) => self
                .viewer_date(published)
                .format(self.locale.pattern())
                .to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}
