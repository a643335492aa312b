use crate::page::{Browser, Document, ListContainer, Page};
use crate::render::ListItem;

use std::collections::HashMap;

use log::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryList {
    items: Vec<ListItem>,
}

impl MemoryList {
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }
}

impl ListContainer for MemoryList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

/// A page held entirely in memory.
///
/// Records every navigation and notice so callers can inspect what the
/// user would have seen.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    forms: HashMap<String, HashMap<String, String>>,
    lists: HashMap<String, MemoryList>,
    location: Option<String>,
    notices: Vec<String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form<I, K, V>(mut self, id: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.forms.insert(id.into(), fields);
        self
    }

    pub fn with_list(mut self, id: impl Into<String>, items: Vec<ListItem>) -> Self {
        self.lists.insert(id.into(), MemoryList { items });
        self
    }

    /// Change a control's value; ignored if the form does not exist.
    pub fn set_field(&mut self, form_id: &str, name: &str, value: impl Into<String>) {
        if let Some(form) = self.forms.get_mut(form_id) {
            form.insert(name.to_string(), value.into());
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn list_items(&self, id: &str) -> Option<&[ListItem]> {
        self.lists.get(id).map(MemoryList::items)
    }
}

impl Document for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.forms.contains_key(id) || self.lists.contains_key(id)
    }

    fn field_value(&self, form_id: &str, name: &str) -> Option<String> {
        self.forms.get(form_id)?.get(name).cloned()
    }
}

impl Browser for MemoryPage {
    fn navigate(&mut self, path: &str) {
        info!("Navigating to {path}");
        self.location = Some(path.to_string());
    }

    fn alert(&mut self, message: &str) {
        debug!("Notice shown: {message}");
        self.notices.push(message.to_string());
    }
}

impl Page for MemoryPage {
    fn list_mut(&mut self, id: &str) -> Option<&mut dyn ListContainer> {
        self.lists
            .get_mut(id)
            .map(|list| list as &mut dyn ListContainer)
    }
}
