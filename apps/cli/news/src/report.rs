//! What the user would have seen, in printable form.

use client_core::MountPoint;
use client_core::handlers::{RenderOutcome, SubmitOutcome};
use client_core::page::MemoryPage;
use client_core::render::{ListItem, render_list_html};

use serde::Serialize;

/// Final state of the in-memory page after one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub succeeded: bool,
    pub location: Option<String>,
    pub notices: Vec<String>,
    pub items: Vec<ListItem>,
}

impl PageReport {
    pub fn from_submit(outcome: &SubmitOutcome, page: &MemoryPage) -> Self {
        Self::from_page(outcome.is_success(), page, Vec::new())
    }

    pub fn from_render(outcome: &RenderOutcome, page: &MemoryPage) -> Self {
        let items = page
            .list_items(MountPoint::NewsList.id())
            .unwrap_or_default()
            .to_vec();
        Self::from_page(matches!(outcome, RenderOutcome::Rendered(_)), page, items)
    }

    pub fn from_items(items: Vec<ListItem>) -> Self {
        Self::from_page(true, &MemoryPage::new(), items)
    }

    /// Nothing rendered; the failure went to the log.
    pub fn failed() -> Self {
        Self::from_page(false, &MemoryPage::new(), Vec::new())
    }

    fn from_page(succeeded: bool, page: &MemoryPage, items: Vec<ListItem>) -> Self {
        Self {
            succeeded,
            location: page.location().map(str::to_string),
            notices: page.notices().to_vec(),
            items,
        }
    }

    /// Human-readable rendering; `html` switches the list to markup.
    pub fn to_text(&self, html: bool) -> String {
        let mut lines = Vec::new();

        if let Some(location) = &self.location {
            lines.push(format!("Location: {location}"));
        }
        for notice in &self.notices {
            lines.push(format!("Notice: {notice}"));
        }

        if html {
            if !self.items.is_empty() {
                lines.push(render_list_html(MountPoint::NewsList.id(), &self.items));
            }
        } else {
            for item in &self.items {
                lines.push(item.to_text());
                lines.push(String::new());
            }
        }

        lines.join("\n")
    }
}
